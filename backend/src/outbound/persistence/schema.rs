//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Mineral catalogue records.
    ///
    /// Every attribute column is `TEXT NOT NULL DEFAULT ''`; `name` is unique.
    minerals (id) {
        /// Store-assigned serial identifier.
        id -> Int4,
        name -> Text,
        image_filename -> Text,
        image_caption -> Text,
        category -> Text,
        group -> Text,
        formula -> Text,
        strunz_classification -> Text,
        crystal_system -> Text,
        mohs_scale_hardness -> Text,
        luster -> Text,
        color -> Text,
        specific_gravity -> Text,
        cleavage -> Text,
        diaphaneity -> Text,
        crystal_habit -> Text,
        streak -> Text,
        optical_properties -> Text,
        refractive_index -> Text,
        unit_cell -> Text,
        crystal_symmetry -> Text,
    }
}
