use crate::app::sources::ImagerySource;
use clap::Parser;
use std::path::PathBuf;

/// Window title, also used as the eframe app id.
pub const WINDOW_TITLE: &str = "Welcome to mapness";
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Melbourne, the demo's home coordinate (degrees).
pub const DEFAULT_LATITUDE: f64 = -37.8136;
pub const DEFAULT_LONGITUDE: f64 = 144.9631;
pub const DEFAULT_ZOOM: u8 = 8;
pub const DEFAULT_OVERLAY: &str = "test.png";

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Desktop map demo - satellite imagery with a pinned image overlay
pub struct Settings {
    /// Latitude of the overlay anchor and initial map center, in degrees
    #[clap(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the overlay anchor and initial map center, in degrees
    #[clap(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    pub lon: f64,

    /// Initial zoom level
    #[clap(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Image to pin on the map at the anchor coordinate
    #[clap(long, value_name = "FILE", default_value = DEFAULT_OVERLAY)]
    pub overlay: PathBuf,

    /// Map imagery provider
    #[clap(long, value_enum, default_value_t = ImagerySource::VirtualEarthSatellite)]
    pub source: ImagerySource,
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error.
    pub fn from_cli() -> Self {
        Self::parse()
    }

    /// Overlay anchor and initial map center.
    pub fn home(&self) -> walkers::Position {
        walkers::lat_lon(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_literals() {
        let settings = Settings::try_parse_from(["mapness-demo"]).unwrap();
        assert_eq!(settings.lat, -37.8136);
        assert_eq!(settings.lon, 144.9631);
        assert_eq!(settings.zoom, 8);
        assert_eq!(settings.overlay, PathBuf::from("test.png"));
        assert_eq!(settings.source, ImagerySource::VirtualEarthSatellite);
    }

    #[test]
    fn negative_coordinates_parse() {
        let settings =
            Settings::try_parse_from(["mapness-demo", "--lat", "-33.87", "--lon", "-70.66"])
                .unwrap();
        assert_eq!(settings.lat, -33.87);
        assert_eq!(settings.lon, -70.66);
    }

    #[test]
    fn source_is_selectable() {
        let settings =
            Settings::try_parse_from(["mapness-demo", "--source", "open-street-map"]).unwrap();
        assert_eq!(settings.source, ImagerySource::OpenStreetMap);
    }

    #[test]
    fn home_carries_the_coordinate() {
        let settings = Settings::try_parse_from(["mapness-demo"]).unwrap();
        let home = settings.home();
        assert!((home.y() - DEFAULT_LATITUDE).abs() < 1e-9);
        assert!((home.x() - DEFAULT_LONGITUDE).abs() < 1e-9);
    }
}
