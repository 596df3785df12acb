// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    /// Toute erreur sqlx devient une erreur d'infrastructure (transitoire), avec son contexte
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            let detail = match &e {
                sqlx::Error::Database(db_err) => db_err.message().to_string(),
                other => other.to_string(),
            };
            DomainError::Infrastructure(format!("{}: {}", context, detail))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_becomes_transient_infrastructure_error() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        let err = res.map_domain_infra("JobFetch").unwrap_err();

        assert!(err.is_transient());
        assert!(err.to_string().contains("JobFetch"));
    }
}
