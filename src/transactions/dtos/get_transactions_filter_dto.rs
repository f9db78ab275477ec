use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{app::models::api_error::ApiError, transactions::models::transaction::Transaction};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GetTransactionsFilterDto {
    #[validate(length(
        min = 3,
        max = 255,
        message = "search must be between 3 and 255 characters."
    ))]
    pub search: Option<String>,
    pub sort: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u8>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl GetTransactionsFilterDto {
    /// Parses `sort` as `field,order`. Defaults to newest first.
    pub fn sort(&self) -> Result<(&'static str, SortOrder), ApiError> {
        let Some(sort) = &self.sort
        else {
            return Ok(("created_at", SortOrder::Desc));
        };

        let sort_params: Vec<&str> = sort.split(',').collect();

        if sort_params.len() != 2 {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Malformed sort query.".to_string(),
            });
        }

        let Some(sort_field) = Transaction::sortable_fields()
            .into_iter()
            .find(|field| *field == sort_params[0])
        else {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid sort field.".to_string(),
            });
        };

        let sort_order = match sort_params[1].to_uppercase().as_str() {
            "ASC" => SortOrder::Asc,
            "DESC" => SortOrder::Desc,
            _ => {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Malformed sort query.".to_string(),
                })
            }
        };

        Ok((sort_field, sort_order))
    }

    /// The LIKE pattern bound for `search`, with wildcards in the input escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|search| {
            let escaped = search
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");

            ["%", &escaped, "%"].concat()
        })
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "SELECT * FROM transactions".to_string();

        let (sort_field, sort_order) = self.sort()?;

        // WHERE CLAUSES
        if self.search.is_some() {
            sql.push_str(" WHERE text ILIKE $1");
        }

        // ORDER BY
        sql.push_str(
            &[
                " ORDER BY ",
                sort_field,
                " ",
                sort_order.value(),
                ", id ",
                sort_order.value(),
            ]
            .concat(),
        );

        // LIMIT
        if let Some(limit) = self.limit {
            sql.push_str(&[" LIMIT ", &limit.to_string()].concat());
        }
        if let Some(offset) = self.offset {
            sql.push_str(&[" OFFSET ", &offset.to_string()].concat());
        }

        tracing::debug!(sql);

        Ok(sql)
    }

    /// Same filtering, ordering and paging as `to_sql`, over transactions already in memory.
    pub fn apply(&self, transactions: Vec<Transaction>) -> Result<Vec<Transaction>, ApiError> {
        let (sort_field, sort_order) = self.sort()?;
        let search = self.search.as_ref().map(|search| search.to_lowercase());

        let mut transactions: Vec<Transaction> = transactions
            .into_iter()
            .filter(|t| match &search {
                Some(search) => t.text.to_lowercase().contains(search),
                None => true,
            })
            .collect();

        transactions.sort_by(|a, b| {
            let ordering = match sort_field {
                "amount" => a.amount.cmp(&b.amount),
                _ => a.created_at.cmp(&b.created_at),
            }
            .then_with(|| a.id.cmp(&b.id));

            match sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let offset = self.offset.unwrap_or(0) as usize;
        let limit = self.limit.map(usize::from).unwrap_or(usize::MAX);

        Ok(transactions.into_iter().skip(offset).take(limit).collect())
    }
}
