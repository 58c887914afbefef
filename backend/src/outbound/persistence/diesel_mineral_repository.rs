//! PostgreSQL-backed `MineralRepository` implementation using Diesel ORM.
//!
//! Attribute-addressed queries pick their column through
//! [`with_mineral_column!`], which keeps the attribute to column mapping in
//! one place. Text matching uses `ILIKE` with LIKE metacharacters escaped, so
//! user input is always matched literally.

use async_trait::async_trait;
use diesel::dsl::{count_star, sql};
use diesel::expression::SqlLiteral;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MineralRepository, MineralRepositoryError};
use crate::domain::{Mineral, MineralAttribute, MineralDraft, MineralId, SEARCHABLE_ATTRIBUTES};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MineralRow, NewMineralRow};
use super::pool::DbPool;
use super::schema::minerals;

type MineralPredicate = Box<dyn BoxableExpression<minerals::table, Pg, SqlType = Bool>>;

/// `name` under the "C" collation, so listings sort by byte order whatever
/// the database locale.
fn name_in_byte_order() -> SqlLiteral<Text> {
    sql::<Text>(r#""minerals"."name" COLLATE "C""#)
}

/// Bind `$column` to the `minerals` column for `$attribute` and evaluate
/// `$body`.
macro_rules! with_mineral_column {
    ($attribute:expr, |$column:ident| $body:expr) => {
        match $attribute {
            MineralAttribute::Name => { let $column = minerals::name; $body }
            MineralAttribute::ImageFilename => { let $column = minerals::image_filename; $body }
            MineralAttribute::ImageCaption => { let $column = minerals::image_caption; $body }
            MineralAttribute::Category => { let $column = minerals::category; $body }
            MineralAttribute::Group => { let $column = minerals::group; $body }
            MineralAttribute::Formula => { let $column = minerals::formula; $body }
            MineralAttribute::StrunzClassification => {
                let $column = minerals::strunz_classification;
                $body
            }
            MineralAttribute::CrystalSystem => { let $column = minerals::crystal_system; $body }
            MineralAttribute::MohsScaleHardness => {
                let $column = minerals::mohs_scale_hardness;
                $body
            }
            MineralAttribute::Luster => { let $column = minerals::luster; $body }
            MineralAttribute::Color => { let $column = minerals::color; $body }
            MineralAttribute::SpecificGravity => { let $column = minerals::specific_gravity; $body }
            MineralAttribute::Cleavage => { let $column = minerals::cleavage; $body }
            MineralAttribute::Diaphaneity => { let $column = minerals::diaphaneity; $body }
            MineralAttribute::CrystalHabit => { let $column = minerals::crystal_habit; $body }
            MineralAttribute::Streak => { let $column = minerals::streak; $body }
            MineralAttribute::OpticalProperties => {
                let $column = minerals::optical_properties;
                $body
            }
            MineralAttribute::RefractiveIndex => { let $column = minerals::refractive_index; $body }
            MineralAttribute::UnitCell => { let $column = minerals::unit_cell; $body }
            MineralAttribute::CrystalSymmetry => { let $column = minerals::crystal_symmetry; $body }
        }
    };
}

/// Escape `%`, `_` and `\` so `value` matches literally under PostgreSQL's
/// default LIKE escape character.
pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn contains_pattern(attribute: MineralAttribute, pattern: &str) -> MineralPredicate {
    with_mineral_column!(attribute, |column| {
        Box::new(column.ilike(pattern.to_owned())) as MineralPredicate
    })
}

fn search_predicate(term: &str) -> Option<MineralPredicate> {
    if term.is_empty() {
        return None;
    }
    let pattern = format!("%{}%", escape_like(term));
    SEARCHABLE_ATTRIBUTES
        .into_iter()
        .map(|attribute| contains_pattern(attribute, &pattern))
        .reduce(|acc, next| Box::new(acc.or(next)) as MineralPredicate)
}

fn value_in(attribute: MineralAttribute, values: &[String]) -> MineralPredicate {
    with_mineral_column!(attribute, |column| {
        Box::new(column.eq_any(values.to_vec())) as MineralPredicate
    })
}

/// Diesel-backed implementation of the [`MineralRepository`] port.
#[derive(Clone)]
pub struct DieselMineralRepository {
    pool: DbPool,
}

impl DieselMineralRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_filtered(
        &self,
        predicate: Option<MineralPredicate>,
        operation: &'static str,
    ) -> Result<Vec<Mineral>, MineralRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = minerals::table
            .select(MineralRow::as_select())
            .order_by((name_in_byte_order().asc(), minerals::id.asc()))
            .into_boxed();
        if let Some(predicate) = predicate {
            query = query.filter(predicate);
        }
        let rows: Vec<MineralRow> = query
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, operation))?;
        Ok(rows.into_iter().map(Mineral::from).collect())
    }
}

#[async_trait]
impl MineralRepository for DieselMineralRepository {
    async fn find_by_id(&self, id: MineralId) -> Result<Option<Mineral>, MineralRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MineralRow> = minerals::table
            .filter(minerals::id.eq(id.get()))
            .select(MineralRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find mineral"))?;
        Ok(row.map(Mineral::from))
    }

    async fn list_by_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Mineral>, MineralRepositoryError> {
        let pattern = format!("{}%", escape_like(prefix));
        let predicate: MineralPredicate = Box::new(minerals::name.ilike(pattern));
        self.load_filtered(Some(predicate), "list minerals by name prefix")
            .await
    }

    async fn list_by_attribute_values(
        &self,
        attribute: MineralAttribute,
        values: &[String],
    ) -> Result<Vec<Mineral>, MineralRepositoryError> {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        self.load_filtered(
            Some(value_in(attribute, values)),
            "list minerals by attribute",
        )
        .await
    }

    async fn search(&self, term: &str) -> Result<Vec<Mineral>, MineralRepositoryError> {
        self.load_filtered(search_predicate(term), "search minerals")
            .await
    }

    async fn distinct_values(
        &self,
        attribute: MineralAttribute,
    ) -> Result<Vec<String>, MineralRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values: Vec<String> = with_mineral_column!(attribute, |column| {
            minerals::table
                .select(column)
                .distinct()
                .load(&mut conn)
                .await
        })
        .map_err(|err| map_diesel_error(err, "distinct mineral values"))?;
        Ok(values)
    }

    async fn count(&self) -> Result<u64, MineralRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = minerals::table
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count minerals"))?;
        u64::try_from(total).map_err(|_| {
            MineralRepositoryError::query(format!("count minerals: negative count {total}"))
        })
    }

    async fn nth(&self, offset: u64) -> Result<Option<Mineral>, MineralRepositoryError> {
        let Ok(offset) = i64::try_from(offset) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MineralRow> = minerals::table
            .select(MineralRow::as_select())
            .order_by(minerals::id.asc())
            .offset(offset)
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "pick mineral by offset"))?;
        Ok(row.map(Mineral::from))
    }

    async fn insert(
        &self,
        draft: &MineralDraft,
    ) -> Result<Option<Mineral>, MineralRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MineralRow> = diesel::insert_into(minerals::table)
            .values(NewMineralRow::from(draft))
            .on_conflict(minerals::name)
            .do_nothing()
            .returning(MineralRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "insert mineral"))?;
        Ok(row.map(Mineral::from))
    }
}

#[cfg(test)]
mod tests {
    //! Query construction checks; execution is covered against a live
    //! database only.
    use diesel::debug_query;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("gray", "gray")]
    #[case("100%", "100\\%")]
    #[case("a_b", "a\\_b")]
    #[case("c:\\x", "c:\\\\x")]
    fn escape_like_neutralises_metacharacters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_like(raw), expected);
    }

    #[test]
    fn empty_term_has_no_predicate() {
        assert!(search_predicate("").is_none());
    }

    #[test]
    fn search_ors_every_searchable_column() {
        let predicate = search_predicate("gray").expect("predicate for non-empty term");
        let query = minerals::table.select(minerals::id).filter(predicate);
        let sql = debug_query::<Pg, _>(&query).to_string();
        assert_eq!(sql.matches("ILIKE").count(), SEARCHABLE_ATTRIBUTES.len());
        assert!(!sql.contains("\"image_filename\" ILIKE"));
        assert!(sql.contains("\"group\" ILIKE"));
    }

    #[test]
    fn listings_order_names_by_bytes() {
        let query = minerals::table
            .select(minerals::id)
            .order_by((name_in_byte_order().asc(), minerals::id.asc()));
        let sql = debug_query::<Pg, _>(&query).to_string();
        assert!(sql.contains(r#"ORDER BY "minerals"."name" COLLATE "C" ASC"#));
    }

    #[test]
    fn value_filter_targets_the_requested_column() {
        let values = vec!["Organic".to_owned(), "organic ".to_owned()];
        let query = minerals::table
            .select(minerals::id)
            .filter(value_in(MineralAttribute::Streak, &values));
        let sql = debug_query::<Pg, _>(&query).to_string();
        assert!(sql.contains("\"minerals\".\"streak\" = ANY"));
    }
}
