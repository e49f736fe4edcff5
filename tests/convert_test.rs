//! End-to-end tests for the conversion pipeline.

mod common;

use common::fixtures::{MEASURED, NOMINAL};
use common::{assert_dimensions, assert_indexed_png, assert_only_colors, load_rgb, TestDir};
use epaper_convert::rendering::OutputFormat;
use epaper_convert::{AppConfig, ConfigError, ConvertError, Converter, Overrides};
use pretty_assertions::assert_eq;

fn converter_for(config: AppConfig) -> Converter {
    Converter::from_config(&config).expect("valid config")
}

#[test]
fn test_default_size_indexed_png() {
    let dir = TestDir::new();
    let input = dir.gradient("input.png", 1200, 900);
    let output = dir.path("out.png");

    let report = converter_for(AppConfig::default())
        .convert(&input, &output)
        .unwrap();

    assert_eq!((report.width, report.height), (800, 480));
    assert_eq!(report.format, OutputFormat::IndexedPng);
    assert_eq!(report.bytes_written as u64, std::fs::metadata(&output).unwrap().len());
    assert_eq!(report.histogram.iter().sum::<usize>(), 800 * 480);

    assert_indexed_png(&output, png::BitDepth::Four);
    let img = load_rgb(&output);
    assert_dimensions(&img, 800, 480);
    assert_only_colors(&img, &NOMINAL);
}

#[test]
fn test_custom_size_bmp_output() {
    let dir = TestDir::new();
    let input = dir.gradient("input.jpg", 300, 500);
    let output = dir.path("out.bmp");

    let config = AppConfig::default().with_overrides(Overrides {
        width: Some(120),
        height: Some(90),
        ..Default::default()
    });
    let report = converter_for(config).convert(&input, &output).unwrap();

    assert_eq!(report.format, OutputFormat::Rgb(image::ImageFormat::Bmp));
    let img = load_rgb(&output);
    assert_dimensions(&img, 120, 90);
    assert_only_colors(&img, &NOMINAL);
}

#[test]
fn test_colorful_input_uses_several_colors() {
    let dir = TestDir::new();
    let input = dir.gradient("input.png", 200, 120);
    let output = dir.path("out.png");

    let config = AppConfig {
        width: 200,
        height: 120,
        ..AppConfig::default()
    };
    let report = converter_for(config).convert(&input, &output).unwrap();

    let used = report.histogram.iter().filter(|&&n| n > 0).count();
    assert!(used >= 5, "only {used} palette colors used: {:?}", report.histogram);
}

#[test]
fn test_preview_writes_measured_colors() {
    let dir = TestDir::new();
    let input = dir.gradient("input.png", 100, 60);
    let output = dir.path("preview.png");

    let config = AppConfig {
        width: 100,
        height: 60,
        preview: true,
        ..AppConfig::default()
    };
    converter_for(config).convert(&input, &output).unwrap();

    assert_only_colors(&load_rgb(&output), &MEASURED);
}

#[test]
fn test_solid_white_stays_white() {
    let dir = TestDir::new();
    let input = dir.solid("white.png", 64, 64, [255, 255, 255]);
    let output = dir.path("out.png");

    let config = AppConfig {
        width: 32,
        height: 20,
        ..AppConfig::default()
    };
    let report = converter_for(config).convert(&input, &output).unwrap();

    assert_eq!(report.histogram, vec![0, 32 * 20, 0, 0, 0, 0, 0]);
    assert_only_colors(&load_rgb(&output), &[[255, 255, 255]]);
}

#[test]
fn test_conversion_is_deterministic() {
    let dir = TestDir::new();
    let input = dir.gradient("input.png", 150, 150);
    let first = dir.path("first.png");
    let second = dir.path("second.png");

    let config = AppConfig {
        width: 90,
        height: 60,
        ..AppConfig::default()
    };
    let converter = converter_for(config);
    converter.convert(&input, &first).unwrap();
    converter.convert(&input, &second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_config_file_with_cli_overrides() {
    let dir = TestDir::new();
    let config_path = dir.config("width: 64\nheight: 40\nsaturation: 1.0\n");

    let config = AppConfig::load(&config_path).unwrap().with_overrides(Overrides {
        width: Some(48),
        ..Default::default()
    });
    assert_eq!((config.width, config.height), (48, 40));
    assert_eq!(config.saturation, 1.0);

    let input = dir.gradient("input.png", 100, 100);
    let output = dir.path("out.png");
    converter_for(config).convert(&input, &output).unwrap();
    assert_dimensions(&load_rgb(&output), 48, 40);
}

#[test]
fn test_two_color_palette_from_config() {
    let dir = TestDir::new();
    let config_path = dir.config(
        "width: 40\nheight: 30\npalette:\n  nominal: ['#000000', '#FFFFFF']\n",
    );
    let config = AppConfig::load(&config_path).unwrap();

    let input = dir.gradient("input.png", 80, 60);
    let output = dir.path("out.png");
    converter_for(config).convert(&input, &output).unwrap();

    assert_indexed_png(&output, png::BitDepth::One);
    assert_only_colors(&load_rgb(&output), &[[0, 0, 0], [255, 255, 255]]);
}

#[test]
fn test_invalid_palette_config_rejected() {
    let dir = TestDir::new();
    let config_path = dir.config(
        "palette:\n  nominal: ['#000000', '#FFFFFF']\n  measured: ['#000000']\n",
    );
    let config = AppConfig::load(&config_path).unwrap();

    let result = Converter::from_config(&config);
    assert!(matches!(
        result,
        Err(ConvertError::Config(ConfigError::Palette(_)))
    ));
}

#[test]
fn test_unreadable_input_writes_nothing() {
    let dir = TestDir::new();
    let input = dir.path("not_an_image.png");
    std::fs::write(&input, b"definitely not a png").unwrap();
    let output = dir.path("out.png");

    let result = converter_for(AppConfig::default()).convert(&input, &output);

    assert!(matches!(result, Err(ConvertError::Decode { .. })));
    assert!(!common::fixtures::written(&output));
}

#[test]
fn test_zero_height_rejected() {
    let config = AppConfig::default().with_overrides(Overrides {
        height: Some(0),
        ..Default::default()
    });
    assert!(matches!(
        Converter::from_config(&config),
        Err(ConvertError::UnsupportedDimensions { height: 0, .. })
    ));
}
