//! End-to-end tests of the centered power spectrum pipeline

use ndarray::{array, Array2};
use num_complex::Complex64;
use power_spectrum::render::display::raster_lines;
use power_spectrum::render::{Colormap, DisplaySurface, PngWriter, TerminalViewerConfig};
use power_spectrum::spectrum::{fft2, fftshift, ifftshift, RendererConfig, SpectrumRenderer};
use power_spectrum::{Signal, SpectrumError};

#[test]
fn test_identity_end_to_end() {
    let mut renderer = SpectrumRenderer::default();
    let power = renderer.power_map(&Signal::identity_2x2()).unwrap();

    assert_eq!(power.shape(), (2, 2));
    let values = power.values();
    // Diagonal bins carry all the energy, off-diagonal bins none
    assert!((values[[0, 0]] - 4.0).abs() < 1e-9);
    assert!((values[[1, 1]] - 4.0).abs() < 1e-9);
    assert!(values[[0, 1]].abs() < 1e-9);
    assert!(values[[1, 0]].abs() < 1e-9);
    assert!((values[[0, 0]] - values[[1, 1]]).abs() < 1e-9);
}

#[test]
fn test_uniform_power_for_single_impulse() {
    let signal = Signal::parse_matrix("0 0; 0 1").unwrap();
    let power = SpectrumRenderer::default().power_map(&signal).unwrap();

    let first = power.values()[[0, 0]];
    assert!(power.values().iter().all(|&p| (p - first).abs() < 1e-9));
    assert!((first - 1.0).abs() < 1e-9);
}

#[test]
fn test_shape_invariance_and_non_negativity() {
    let mut renderer = SpectrumRenderer::default();

    for &(rows, cols) in &[(1, 1), (1, 7), (6, 1), (3, 4), (5, 5), (8, 3)] {
        let data = Array2::from_shape_fn((rows, cols), |(i, j)| ((i * 3 + j * 7) % 5) as f64 - 2.0);
        let power = renderer.power_map(&Signal::real(data).unwrap()).unwrap();

        assert_eq!(power.shape(), (rows, cols));
        assert!(power.values().iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn test_parseval() {
    let data = Array2::from_shape_fn((6, 5), |(i, j)| {
        Complex64::new((i as f64 * 0.9).cos(), (j as f64 * 1.3).sin())
    });
    let signal = Signal::complex(data).unwrap();
    let power = SpectrumRenderer::default().power_map(&signal).unwrap();

    let expected = 30.0 * signal.energy();
    assert!((power.total() - expected).abs() < 1e-9 * expected.max(1.0));
}

#[test]
fn test_shift_round_trip_on_spectrum() {
    let signal = Signal::real(Array2::from_shape_fn((3, 4), |(i, j)| (i + 2 * j) as f64)).unwrap();
    let spectrum = fft2(&signal).unwrap();

    assert_eq!(ifftshift(&fftshift(&spectrum)), spectrum);
}

#[test]
fn test_degenerate_input_fails_fast() {
    assert!(matches!(
        Signal::real(Array2::zeros((0, 2))),
        Err(SpectrumError::EmptySignal { .. })
    ));
    assert!(matches!(
        Signal::real(Array2::zeros((2, 0))),
        Err(SpectrumError::EmptySignal { .. })
    ));
}

#[test]
fn test_one_raster_feeds_terminal_and_png() {
    let mut renderer = SpectrumRenderer::new(RendererConfig {
        colormap: Colormap::Grayscale,
        ..RendererConfig::default()
    });
    let raster = renderer.rasterize(&Signal::identity_2x2()).unwrap();

    let lines = raster_lines(&raster, &TerminalViewerConfig::default());
    let footer = lines[lines.len() - 2].to_string();
    assert!(footer.contains("2x2 cells"));
    assert!(footer.contains("4.000000e0]"));

    let path = std::env::temp_dir().join(format!("power_spectrum_{}.png", std::process::id()));
    let mut writer = PngWriter::new(&path, 3);
    writer.show(&raster).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    // IHDR width and height, big-endian
    assert_eq!(&bytes[16..20], &6u32.to_be_bytes());
    assert_eq!(&bytes[20..24], &6u32.to_be_bytes());
}

#[test]
fn test_oversized_png_is_an_error() {
    let raster = SpectrumRenderer::default()
        .rasterize(&Signal::identity_2x2())
        .unwrap();
    let mut writer = PngWriter::new(std::env::temp_dir().join("power_spectrum_huge.png"), usize::MAX / 2);

    assert!(matches!(
        writer.show(&raster),
        Err(SpectrumError::ImageTooLarge { .. })
    ));
}

#[test]
fn test_complex_signal() {
    let signal = Signal::complex(array![[Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)]]).unwrap();
    let power = SpectrumRenderer::default().power_map(&signal).unwrap();

    assert_eq!(power.shape(), (1, 2));
    assert!(power.values().iter().all(|&p| (p - 1.0).abs() < 1e-12));
}
