use anyhow::{Context, Result};
use sea_orm::sea_query::{Alias, Expr, Func, Order, Query, SelectStatement, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection};

use crate::entities::sales;
use crate::models::earnings::{MonthlyEarnings, remove_tax};
use crate::models::month::Month;

const PERIOD_ALIAS: &str = "period";

/// Date functions differ per backend.
struct DateDialect {
    /// `YYYY-MM` of `saledate`
    period: &'static str,
    /// Month-of-year of `saledate` as an integer
    month_of_year: &'static str,
    float_type: &'static str,
}

impl DateDialect {
    const fn for_backend(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::Postgres => Self {
                period: "TO_CHAR(saledate, 'YYYY-MM')",
                month_of_year: "EXTRACT(MONTH FROM saledate)",
                float_type: "DOUBLE PRECISION",
            },
            DatabaseBackend::Sqlite => Self {
                period: "strftime('%Y-%m', saledate)",
                month_of_year: "CAST(strftime('%m', saledate) AS INTEGER)",
                float_type: "REAL",
            },
            DatabaseBackend::MySql => Self {
                period: "DATE_FORMAT(saledate, '%Y-%m')",
                month_of_year: "MONTH(saledate)",
                float_type: "DOUBLE",
            },
        }
    }
}

fn total_alias(index: usize) -> String {
    format!("total_{index}")
}

/// What one sale contributes before tax.
fn net_amount() -> SimpleExpr {
    Expr::expr(
        Expr::col(sales::Column::Listprice).sub(Expr::col(sales::Column::Amounttopayprofessional)),
    )
    .sub(Expr::col(sales::Column::Salondiscount))
}

/// `CAST(COALESCE(SUM(CASE WHEN family = ? THEN net ELSE 0 END), 0) AS float)`
fn category_total(family: &str, float_type: &str) -> SimpleExpr {
    let net = Expr::case(
        Expr::col(sales::Column::Family).eq(family),
        net_amount(),
    )
    .finally(Expr::cust("0"));

    Func::cast_as(
        Func::coalesce([Func::sum(net).into(), Expr::cust("0")]),
        Alias::new(float_type),
    )
    .into()
}

/// One row per year-month whose month-of-year is `month`, one summed column per category.
fn monthly_earnings_query(
    backend: DatabaseBackend,
    month: Month,
    categories: &[String],
) -> SelectStatement {
    let dialect = DateDialect::for_backend(backend);
    let mut query = Query::select();

    query.expr_as(Expr::cust(dialect.period), Alias::new(PERIOD_ALIAS));

    for (index, family) in categories.iter().enumerate() {
        query.expr_as(
            category_total(family, dialect.float_type),
            Alias::new(total_alias(index)),
        );
    }

    query
        .from(sales::Entity)
        .and_where(Expr::expr(Expr::cust(dialect.month_of_year)).eq(i32::from(month.number())))
        .add_group_by([Expr::cust(dialect.period)])
        .order_by_expr(Expr::cust(dialect.period), Order::Asc);

    query
}

pub struct SalesRepository {
    conn: DatabaseConnection,
}

impl SalesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Net-of-tax earnings per category for `month` of every year on record.
    ///
    /// `categories` are sale families; each result is keyed by the lowercased family.
    pub async fn monthly_earnings(
        &self,
        month: Month,
        categories: &[String],
    ) -> Result<Vec<MonthlyEarnings>> {
        let backend = self.conn.get_database_backend();
        let statement = backend.build(&monthly_earnings_query(backend, month, categories));

        let rows = self
            .conn
            .query_all(statement)
            .await
            .with_context(|| format!("Failed to aggregate earnings for month {month}"))?;

        rows.iter()
            .map(|row| {
                let period: String = row.try_get("", PERIOD_ALIAS)?;
                let totals = categories
                    .iter()
                    .enumerate()
                    .map(|(index, family)| {
                        let gross: f64 = row.try_get("", &total_alias(index))?;
                        Ok((family.to_lowercase(), remove_tax(gross)))
                    })
                    .collect::<Result<Vec<_>, sea_orm::DbErr>>()?;

                Ok(MonthlyEarnings { period, totals })
            })
            .collect::<Result<Vec<_>, sea_orm::DbErr>>()
            .context("Failed to read earnings row")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["CABELLO".to_string(), "UNAS".to_string()]
    }

    #[test]
    fn test_postgres_query_binds_categories_and_month() {
        let month = Month::parse("03").unwrap();
        let statement = DatabaseBackend::Postgres.build(&monthly_earnings_query(
            DatabaseBackend::Postgres,
            month,
            &categories(),
        ));

        assert!(statement.sql.contains(r#"TO_CHAR(saledate, 'YYYY-MM') AS "period""#));
        assert!(statement.sql.contains(r#""family" = $1"#));
        assert!(statement.sql.contains(r#""family" = $2"#));
        assert!(statement.sql.contains("(EXTRACT(MONTH FROM saledate)) = $3"));
        assert!(statement.sql.contains("AS DOUBLE PRECISION)"));
        assert!(statement.sql.contains("GROUP BY TO_CHAR(saledate, 'YYYY-MM')"));
        assert!(statement.sql.contains("ORDER BY TO_CHAR(saledate, 'YYYY-MM') ASC"));
        assert!(!statement.sql.contains('?'));
        assert!(!statement.sql.contains("CABELLO"));
        assert_eq!(statement.values.map(|v| v.0.len()), Some(3));
    }

    #[test]
    fn test_sqlite_query_uses_strftime() {
        let month = Month::parse("12").unwrap();
        let statement = DatabaseBackend::Sqlite.build(&monthly_earnings_query(
            DatabaseBackend::Sqlite,
            month,
            &categories(),
        ));

        assert!(statement.sql.contains("strftime('%Y-%m', saledate)"));
        assert!(statement.sql.contains("AS REAL)"));
        assert!(statement.sql.contains("(CAST(strftime('%m', saledate) AS INTEGER)) = ?"));
        assert_eq!(statement.values.map(|v| v.0.len()), Some(3));
    }
}
