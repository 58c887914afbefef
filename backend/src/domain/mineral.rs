//! Mineral records and their attributes.
//!
//! A mineral is a flat bag of text attributes. Absence is the empty string,
//! never a distinct null, so every accessor returns `&str`.
//!
//! Attributes are addressed by [`MineralAttribute`] rather than by field name
//! strings; the enum carries the explicit accessor mapping used by display
//! ordering, search, and category/streak indexing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned mineral identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MineralId(i32);

impl MineralId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Return the raw store identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MineralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every attribute a mineral record carries, `name` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineralAttribute {
    /// Mineral name.
    Name,
    /// Specimen photograph file name.
    ImageFilename,
    /// Photograph caption.
    ImageCaption,
    /// Broad category.
    Category,
    /// Mineral group.
    Group,
    /// Chemical formula.
    Formula,
    /// Strunz classification code.
    StrunzClassification,
    /// Crystal system.
    CrystalSystem,
    /// Mohs scale hardness.
    MohsScaleHardness,
    /// Luster.
    Luster,
    /// Color.
    Color,
    /// Specific gravity.
    SpecificGravity,
    /// Cleavage.
    Cleavage,
    /// Diaphaneity.
    Diaphaneity,
    /// Crystal habit.
    CrystalHabit,
    /// Streak color.
    Streak,
    /// Optical properties.
    OpticalProperties,
    /// Refractive index.
    RefractiveIndex,
    /// Unit cell parameters.
    UnitCell,
    /// Crystal symmetry.
    CrystalSymmetry,
}

/// Detail-page ordering: most commonly populated attributes first.
pub const DISPLAY_PRIORITY: [MineralAttribute; 17] = [
    MineralAttribute::Category,
    MineralAttribute::Group,
    MineralAttribute::Formula,
    MineralAttribute::StrunzClassification,
    MineralAttribute::CrystalSystem,
    MineralAttribute::MohsScaleHardness,
    MineralAttribute::Luster,
    MineralAttribute::Color,
    MineralAttribute::SpecificGravity,
    MineralAttribute::Cleavage,
    MineralAttribute::Diaphaneity,
    MineralAttribute::CrystalHabit,
    MineralAttribute::Streak,
    MineralAttribute::OpticalProperties,
    MineralAttribute::RefractiveIndex,
    MineralAttribute::UnitCell,
    MineralAttribute::CrystalSymmetry,
];

/// Attributes consulted by free-text search. `image_filename` is excluded.
pub const SEARCHABLE_ATTRIBUTES: [MineralAttribute; 19] = [
    MineralAttribute::Name,
    MineralAttribute::ImageCaption,
    MineralAttribute::Category,
    MineralAttribute::Formula,
    MineralAttribute::StrunzClassification,
    MineralAttribute::Color,
    MineralAttribute::CrystalSystem,
    MineralAttribute::UnitCell,
    MineralAttribute::CrystalSymmetry,
    MineralAttribute::Cleavage,
    MineralAttribute::MohsScaleHardness,
    MineralAttribute::Luster,
    MineralAttribute::Streak,
    MineralAttribute::Diaphaneity,
    MineralAttribute::OpticalProperties,
    MineralAttribute::RefractiveIndex,
    MineralAttribute::CrystalHabit,
    MineralAttribute::SpecificGravity,
    MineralAttribute::Group,
];

impl MineralAttribute {
    /// All attributes in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Name,
        Self::ImageFilename,
        Self::ImageCaption,
        Self::Category,
        Self::Group,
        Self::Formula,
        Self::StrunzClassification,
        Self::CrystalSystem,
        Self::MohsScaleHardness,
        Self::Luster,
        Self::Color,
        Self::SpecificGravity,
        Self::Cleavage,
        Self::Diaphaneity,
        Self::CrystalHabit,
        Self::Streak,
        Self::OpticalProperties,
        Self::RefractiveIndex,
        Self::UnitCell,
        Self::CrystalSymmetry,
    ];

    /// Snake-case attribute name, matching the storage column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ImageFilename => "image_filename",
            Self::ImageCaption => "image_caption",
            Self::Category => "category",
            Self::Group => "group",
            Self::Formula => "formula",
            Self::StrunzClassification => "strunz_classification",
            Self::CrystalSystem => "crystal_system",
            Self::MohsScaleHardness => "mohs_scale_hardness",
            Self::Luster => "luster",
            Self::Color => "color",
            Self::SpecificGravity => "specific_gravity",
            Self::Cleavage => "cleavage",
            Self::Diaphaneity => "diaphaneity",
            Self::CrystalHabit => "crystal_habit",
            Self::Streak => "streak",
            Self::OpticalProperties => "optical_properties",
            Self::RefractiveIndex => "refractive_index",
            Self::UnitCell => "unit_cell",
            Self::CrystalSymmetry => "crystal_symmetry",
        }
    }

    /// Human-readable label derived from the attribute name.
    ///
    /// # Examples
    /// ```
    /// use mineral_catalog::domain::MineralAttribute;
    ///
    /// assert_eq!(MineralAttribute::MohsScaleHardness.label(), "Mohs Scale Hardness");
    /// ```
    #[must_use]
    pub fn label(self) -> String {
        self.as_str()
            .split('_')
            .map(capitalise)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for MineralAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when parsing an unknown attribute name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mineral attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for MineralAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == s)
            .ok_or_else(|| UnknownAttribute(s.to_owned()))
    }
}

/// Attribute values for a mineral that has not been stored yet.
///
/// Seeding builds drafts; the store assigns the identifier on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralDraft {
    /// Mineral name.
    pub name: String,
    /// Specimen photograph file name.
    pub image_filename: String,
    /// Photograph caption.
    pub image_caption: String,
    /// Broad category.
    pub category: String,
    /// Mineral group.
    pub group: String,
    /// Chemical formula.
    pub formula: String,
    /// Strunz classification code.
    pub strunz_classification: String,
    /// Crystal system.
    pub crystal_system: String,
    /// Mohs scale hardness.
    pub mohs_scale_hardness: String,
    /// Luster.
    pub luster: String,
    /// Color.
    pub color: String,
    /// Specific gravity.
    pub specific_gravity: String,
    /// Cleavage.
    pub cleavage: String,
    /// Diaphaneity.
    pub diaphaneity: String,
    /// Crystal habit.
    pub crystal_habit: String,
    /// Streak color.
    pub streak: String,
    /// Optical properties.
    pub optical_properties: String,
    /// Refractive index.
    pub refractive_index: String,
    /// Unit cell parameters.
    pub unit_cell: String,
    /// Crystal symmetry.
    pub crystal_symmetry: String,
}

impl MineralDraft {
    /// Start a draft with only a name; every other attribute is empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn value(&self, attribute: MineralAttribute) -> &str {
        match attribute {
            MineralAttribute::Name => &self.name,
            MineralAttribute::ImageFilename => &self.image_filename,
            MineralAttribute::ImageCaption => &self.image_caption,
            MineralAttribute::Category => &self.category,
            MineralAttribute::Group => &self.group,
            MineralAttribute::Formula => &self.formula,
            MineralAttribute::StrunzClassification => &self.strunz_classification,
            MineralAttribute::CrystalSystem => &self.crystal_system,
            MineralAttribute::MohsScaleHardness => &self.mohs_scale_hardness,
            MineralAttribute::Luster => &self.luster,
            MineralAttribute::Color => &self.color,
            MineralAttribute::SpecificGravity => &self.specific_gravity,
            MineralAttribute::Cleavage => &self.cleavage,
            MineralAttribute::Diaphaneity => &self.diaphaneity,
            MineralAttribute::CrystalHabit => &self.crystal_habit,
            MineralAttribute::Streak => &self.streak,
            MineralAttribute::OpticalProperties => &self.optical_properties,
            MineralAttribute::RefractiveIndex => &self.refractive_index,
            MineralAttribute::UnitCell => &self.unit_cell,
            MineralAttribute::CrystalSymmetry => &self.crystal_symmetry,
        }
    }
}

impl From<mineral_data::MineralSeed> for MineralDraft {
    fn from(seed: mineral_data::MineralSeed) -> Self {
        Self {
            name: seed.name.trim().to_owned(),
            image_filename: seed.image_filename,
            image_caption: seed.image_caption,
            category: seed.category,
            group: seed.group,
            formula: seed.formula,
            strunz_classification: seed.strunz_classification,
            crystal_system: seed.crystal_system,
            mohs_scale_hardness: seed.mohs_scale_hardness,
            luster: seed.luster,
            color: seed.color,
            specific_gravity: seed.specific_gravity,
            cleavage: seed.cleavage,
            diaphaneity: seed.diaphaneity,
            crystal_habit: seed.crystal_habit,
            streak: seed.streak,
            optical_properties: seed.optical_properties,
            refractive_index: seed.refractive_index,
            unit_cell: seed.unit_cell,
            crystal_symmetry: seed.crystal_symmetry,
        }
    }
}

/// A stored mineral record.
///
/// Serialises flat: `id` alongside every attribute, which is the shape the
/// templates consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mineral {
    id: MineralId,
    #[serde(flatten)]
    fields: MineralDraft,
}

impl Mineral {
    /// Pair a store identifier with its attribute values.
    #[must_use]
    pub fn new(id: MineralId, fields: MineralDraft) -> Self {
        Self { id, fields }
    }

    /// Store identifier.
    #[must_use]
    pub fn id(&self) -> MineralId {
        self.id
    }

    /// Mineral name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Look up an attribute value; empty when absent.
    #[must_use]
    pub fn value(&self, attribute: MineralAttribute) -> &str {
        self.fields.value(attribute)
    }

    /// Borrow all attribute values.
    #[must_use]
    pub fn fields(&self) -> &MineralDraft {
        &self.fields
    }

    /// Populated attributes in [`DISPLAY_PRIORITY`] order.
    ///
    /// # Examples
    /// ```
    /// use mineral_catalog::domain::{Mineral, MineralAttribute, MineralDraft, MineralId};
    ///
    /// let mut draft = MineralDraft::named("Adamite");
    /// draft.streak = "White".into();
    /// draft.category = "Arsenate".into();
    /// let mineral = Mineral::new(MineralId::new(1), draft);
    ///
    /// assert_eq!(
    ///     mineral.ordered_attributes(),
    ///     vec![
    ///         (MineralAttribute::Category, "Arsenate"),
    ///         (MineralAttribute::Streak, "White"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn ordered_attributes(&self) -> Vec<(MineralAttribute, &str)> {
        DISPLAY_PRIORITY
            .into_iter()
            .map(|attribute| (attribute, self.value(attribute)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Case-insensitive prefix match on the name.
    #[must_use]
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        self.name().to_lowercase().starts_with(&prefix.to_lowercase())
    }

    /// `true` when any searchable attribute contains `term`, ignoring case.
    ///
    /// An empty term matches every mineral.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        SEARCHABLE_ATTRIBUTES
            .into_iter()
            .any(|attribute| self.value(attribute).to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn adamite() -> Mineral {
        let mut draft = MineralDraft::named("Adamite");
        draft.image_filename = "Adamite.jpg".into();
        draft.streak = "White to pale green".into();
        draft.formula = "Zn2AsO4OH".into();
        draft.crystal_symmetry = "Orthorhombic dipyramidal".into();
        draft.category = "Arsenate".into();
        Mineral::new(MineralId::new(4), draft)
    }

    #[rstest]
    fn ordered_attributes_follow_priority_not_field_order(adamite: Mineral) {
        let attributes: Vec<MineralAttribute> = adamite
            .ordered_attributes()
            .into_iter()
            .map(|(attribute, _)| attribute)
            .collect();
        assert_eq!(
            attributes,
            [
                MineralAttribute::Category,
                MineralAttribute::Formula,
                MineralAttribute::Streak,
                MineralAttribute::CrystalSymmetry,
            ]
        );
    }

    #[rstest]
    fn ordered_attributes_skip_name_and_image(adamite: Mineral) {
        assert!(
            adamite
                .ordered_attributes()
                .iter()
                .all(|(attribute, value)| !value.is_empty()
                    && *attribute != MineralAttribute::Name
                    && *attribute != MineralAttribute::ImageFilename)
        );
    }

    #[rstest]
    #[case("a")]
    #[case("A")]
    #[case("ada")]
    #[case("")]
    fn name_prefix_ignores_case(adamite: Mineral, #[case] prefix: &str) {
        assert!(adamite.name_starts_with(prefix));
    }

    #[rstest]
    fn name_prefix_rejects_other_letters(adamite: Mineral) {
        assert!(!adamite.name_starts_with("b"));
        assert!(!adamite.name_starts_with("damite"));
    }

    #[rstest]
    #[case("PALE GREEN", true)]
    #[case("zn2", true)]
    #[case("dipyramidal", true)]
    #[case("", true)]
    #[case("adamite.jpg", false)]
    #[case("monoclinic", false)]
    fn search_covers_searchable_fields_only(
        adamite: Mineral,
        #[case] term: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(adamite.matches_term(term), expected);
    }

    #[rstest]
    #[case(MineralAttribute::ImageCaption, "Image Caption")]
    #[case(MineralAttribute::Group, "Group")]
    #[case(MineralAttribute::StrunzClassification, "Strunz Classification")]
    fn labels_are_title_cased(#[case] attribute: MineralAttribute, #[case] expected: &str) {
        assert_eq!(attribute.label(), expected);
    }

    #[test]
    fn attribute_names_round_trip() {
        for attribute in MineralAttribute::ALL {
            assert_eq!(attribute.as_str().parse::<MineralAttribute>(), Ok(attribute));
        }
        assert_eq!(
            "hardness".parse::<MineralAttribute>(),
            Err(UnknownAttribute("hardness".to_owned()))
        );
    }

    #[rstest]
    fn serialises_flat_with_id(adamite: Mineral) {
        let value = serde_json::to_value(&adamite).expect("serialise mineral");
        assert_eq!(value.get("id"), Some(&serde_json::json!(4)));
        assert_eq!(value.get("name"), Some(&serde_json::json!("Adamite")));
        assert_eq!(value.get("luster"), Some(&serde_json::json!("")));
    }
}
