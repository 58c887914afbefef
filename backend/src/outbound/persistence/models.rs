//! Internal Diesel row structs for the `minerals` table.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain types.

use diesel::prelude::*;

use crate::domain::{Mineral, MineralDraft, MineralId};

use super::schema::minerals;

/// Row struct for reading from the minerals table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = minerals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MineralRow {
    pub id: i32,
    pub name: String,
    pub image_filename: String,
    pub image_caption: String,
    pub category: String,
    pub group: String,
    pub formula: String,
    pub strunz_classification: String,
    pub crystal_system: String,
    pub mohs_scale_hardness: String,
    pub luster: String,
    pub color: String,
    pub specific_gravity: String,
    pub cleavage: String,
    pub diaphaneity: String,
    pub crystal_habit: String,
    pub streak: String,
    pub optical_properties: String,
    pub refractive_index: String,
    pub unit_cell: String,
    pub crystal_symmetry: String,
}

impl From<MineralRow> for Mineral {
    fn from(row: MineralRow) -> Self {
        Mineral::new(
            MineralId::new(row.id),
            MineralDraft {
                name: row.name,
                image_filename: row.image_filename,
                image_caption: row.image_caption,
                category: row.category,
                group: row.group,
                formula: row.formula,
                strunz_classification: row.strunz_classification,
                crystal_system: row.crystal_system,
                mohs_scale_hardness: row.mohs_scale_hardness,
                luster: row.luster,
                color: row.color,
                specific_gravity: row.specific_gravity,
                cleavage: row.cleavage,
                diaphaneity: row.diaphaneity,
                crystal_habit: row.crystal_habit,
                streak: row.streak,
                optical_properties: row.optical_properties,
                refractive_index: row.refractive_index,
                unit_cell: row.unit_cell,
                crystal_symmetry: row.crystal_symmetry,
            },
        )
    }
}

/// Insertable struct for creating new mineral records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = minerals)]
pub(crate) struct NewMineralRow<'a> {
    pub name: &'a str,
    pub image_filename: &'a str,
    pub image_caption: &'a str,
    pub category: &'a str,
    pub group: &'a str,
    pub formula: &'a str,
    pub strunz_classification: &'a str,
    pub crystal_system: &'a str,
    pub mohs_scale_hardness: &'a str,
    pub luster: &'a str,
    pub color: &'a str,
    pub specific_gravity: &'a str,
    pub cleavage: &'a str,
    pub diaphaneity: &'a str,
    pub crystal_habit: &'a str,
    pub streak: &'a str,
    pub optical_properties: &'a str,
    pub refractive_index: &'a str,
    pub unit_cell: &'a str,
    pub crystal_symmetry: &'a str,
}

impl<'a> From<&'a MineralDraft> for NewMineralRow<'a> {
    fn from(draft: &'a MineralDraft) -> Self {
        Self {
            name: &draft.name,
            image_filename: &draft.image_filename,
            image_caption: &draft.image_caption,
            category: &draft.category,
            group: &draft.group,
            formula: &draft.formula,
            strunz_classification: &draft.strunz_classification,
            crystal_system: &draft.crystal_system,
            mohs_scale_hardness: &draft.mohs_scale_hardness,
            luster: &draft.luster,
            color: &draft.color,
            specific_gravity: &draft.specific_gravity,
            cleavage: &draft.cleavage,
            diaphaneity: &draft.diaphaneity,
            crystal_habit: &draft.crystal_habit,
            streak: &draft.streak,
            optical_properties: &draft.optical_properties,
            refractive_index: &draft.refractive_index,
            unit_cell: &draft.unit_cell,
            crystal_symmetry: &draft.crystal_symmetry,
        }
    }
}
