//! Map imagery providers.
//!
//! OpenStreetMap comes straight from walkers; the Virtual Earth satellite
//! layer is a custom [`TileSource`] using the quadkey tile naming scheme.

use egui::Context;
use walkers::{
    HttpTiles, TileId,
    sources::{Attribution, OpenStreetMap, TileSource},
};

/// Imagery providers selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ImagerySource {
    OpenStreetMap,
    VirtualEarthSatellite,
}

impl ImagerySource {
    /// Build the HTTP tile provider for this source.
    pub fn tiles(self, ctx: Context) -> HttpTiles {
        match self {
            Self::OpenStreetMap => HttpTiles::new(OpenStreetMap, ctx),
            Self::VirtualEarthSatellite => HttpTiles::new(VirtualEarthSatellite, ctx),
        }
    }

    /// Attribution line drawn at the bottom of the map.
    pub fn attribution_text(self) -> &'static str {
        match self {
            Self::OpenStreetMap => OpenStreetMap.attribution().text,
            Self::VirtualEarthSatellite => VirtualEarthSatellite.attribution().text,
        }
    }
}

// clap needs Display for default_value_t; keep it in sync with the
// ValueEnum kebab-case names.
impl std::fmt::Display for ImagerySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OpenStreetMap => "open-street-map",
            Self::VirtualEarthSatellite => "virtual-earth-satellite",
        };
        f.write_str(name)
    }
}

/// Bing Maps (Virtual Earth) satellite tile source
///
/// Quadkey levels start at 1, so the single zoom-0 world tile has no quadkey
/// and its URL (`.../tiles/a.jpeg`) is not served; that view renders blank
/// until the first zoom-in.
pub struct VirtualEarthSatellite;

/// Quadkey for a tile: one base-4 digit per zoom level, most significant
/// first, interleaving the x and y bits.
fn quadkey(tile_id: TileId) -> String {
    let mut key = String::with_capacity(tile_id.zoom as usize);
    for i in (1..=tile_id.zoom).rev() {
        let mask = 1u32 << (i - 1);
        let mut digit = 0u8;
        if tile_id.x & mask != 0 {
            digit += 1;
        }
        if tile_id.y & mask != 0 {
            digit += 2;
        }
        key.push(char::from(b'0' + digit));
    }
    key
}

impl TileSource for VirtualEarthSatellite {
    fn tile_url(&self, tile_id: TileId) -> String {
        // Rotate across the t0-t3 tile servers.
        format!(
            "https://ecn.t{}.tiles.virtualearth.net/tiles/a{}.jpeg?g=1",
            (tile_id.x + tile_id.y) % 4,
            quadkey(tile_id)
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© Microsoft (Virtual Earth)",
            url: "https://www.bing.com/maps",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        19
    }
}
