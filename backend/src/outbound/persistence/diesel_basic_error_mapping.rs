//! Diesel and pool error mapping for the mineral repository.

use tracing::debug;

use crate::domain::ports::MineralRepositoryError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> MineralRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    MineralRepositoryError::connection(message)
}

/// Map Diesel failures, logging the detail and returning a stable message.
///
/// A closed connection is reported as a connection error so callers answer
/// 503; everything else is a query error.
pub(crate) fn map_diesel_error(
    error: diesel::result::Error,
    operation: &'static str,
) -> MineralRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        _ => debug!(error = %error, operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MineralRepositoryError::connection(format!("{operation}: database connection closed"))
        }
        DieselError::NotFound => MineralRepositoryError::query(format!("{operation}: no row")),
        DieselError::QueryBuilderError(_) => {
            MineralRepositoryError::query(format!("{operation}: invalid query"))
        }
        _ => MineralRepositoryError::query(format!("{operation}: database error")),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("bad url"))]
    fn pool_errors_are_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            MineralRepositoryError::Connection { .. }
        ));
    }

    #[test]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error, "count minerals"),
            MineralRepositoryError::connection("count minerals: database connection closed")
        );
    }

    #[test]
    fn other_failures_are_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound, "find mineral"),
            MineralRepositoryError::query("find mineral: no row")
        );
        assert!(matches!(
            map_diesel_error(DieselError::RollbackTransaction, "insert mineral"),
            MineralRepositoryError::Query { .. }
        ));
    }
}
