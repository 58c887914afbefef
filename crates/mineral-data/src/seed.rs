//! Seed record for a single mineral.

use serde::Deserialize;

/// One mineral as it appears in the seed file.
///
/// Keys in the file use spaces rather than underscores. Any missing key
/// deserialises to an empty string, matching the catalogue's convention that
/// absence is represented by `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MineralSeed {
    /// Mineral name; required and unique within a seed file.
    pub name: String,
    /// File name of the specimen photograph.
    #[serde(rename = "image filename")]
    pub image_filename: String,
    /// Caption shown beneath the photograph.
    #[serde(rename = "image caption")]
    pub image_caption: String,
    /// Broad mineral category.
    pub category: String,
    /// Mineral group.
    pub group: String,
    /// Chemical formula (may contain HTML sub/superscript markup).
    pub formula: String,
    /// Strunz classification code.
    #[serde(rename = "strunz classification")]
    pub strunz_classification: String,
    /// Crystal system.
    #[serde(rename = "crystal system")]
    pub crystal_system: String,
    /// Mohs scale hardness.
    #[serde(rename = "mohs scale hardness")]
    pub mohs_scale_hardness: String,
    /// Luster.
    pub luster: String,
    /// Color.
    pub color: String,
    /// Specific gravity.
    #[serde(rename = "specific gravity")]
    pub specific_gravity: String,
    /// Cleavage.
    pub cleavage: String,
    /// Diaphaneity.
    pub diaphaneity: String,
    /// Crystal habit.
    #[serde(rename = "crystal habit")]
    pub crystal_habit: String,
    /// Streak color.
    pub streak: String,
    /// Optical properties.
    #[serde(rename = "optical properties")]
    pub optical_properties: String,
    /// Refractive index.
    #[serde(rename = "refractive index")]
    pub refractive_index: String,
    /// Unit cell parameters.
    #[serde(rename = "unit cell")]
    pub unit_cell: String,
    /// Crystal symmetry.
    #[serde(rename = "crystal symmetry")]
    pub crystal_symmetry: String,
}
