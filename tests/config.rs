use pixel_life::{run, Config, Error};

// Invalid settings are rejected before any window is opened.

#[test]
fn zero_frame_rate_is_an_error() {
    let config = Config {
        frame_rate: 0.,
        ..Config::default()
    };
    assert!(matches!(run(3, 3, config), Err(Error::FrameRate(_))));
}

#[test]
fn nan_frame_rate_is_an_error() {
    let config = Config {
        frame_rate: f64::NAN,
        ..Config::default()
    };
    assert!(matches!(run(3, 3, config), Err(Error::FrameRate(_))));
}

#[test]
fn zero_cell_scale_is_an_error() {
    let config = Config {
        cell_scale: 0,
        ..Config::default()
    };
    assert!(matches!(run(3, 3, config), Err(Error::CellScale)));
}

#[test]
fn empty_grid_is_an_error() {
    assert!(matches!(
        run(0, 3, Config::default()),
        Err(Error::Grid(_))
    ));
}
