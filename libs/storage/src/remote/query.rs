use serde::Serialize;

/// Declarative query against one record-store table
///
/// Serialized as the body of a `query` request: a field list, filter
/// predicates, sort clauses, and optional paging.
///
/// # Example
///
/// ```ignore
/// let query = RecordQuery::select(["Id", "Name", "is_completed_c"])
///     .filter_eq("category_c", "work")
///     .order_desc("CreatedOn");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,

    #[serde(rename = "where", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterClause>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderClause>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_info: Option<PagingInfo>,
}

/// One filter predicate (`field <op> values`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterClause {
    pub field_name: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    EqualTo,
    Contains,
}

/// One sort clause
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderClause {
    pub field_name: String,
    pub sort_type: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingInfo {
    pub limit: i64,
    pub offset: i64,
}

impl RecordQuery {
    /// Start a query returning the given columns
    pub fn select<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add an equality predicate
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FilterClause {
            field_name: field.into(),
            operator: FilterOperator::EqualTo,
            values: vec![value.into()],
        });
        self
    }

    /// Add a case-insensitive substring predicate
    pub fn filter_contains(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FilterClause {
            field_name: field.into(),
            operator: FilterOperator::Contains,
            values: vec![value.into()],
        });
        self
    }

    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by.push(OrderClause {
            field_name: field.into(),
            sort_type: SortDirection::Asc,
        });
        self
    }

    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by.push(OrderClause {
            field_name: field.into(),
            sort_type: SortDirection::Desc,
        });
        self
    }

    pub fn page(mut self, limit: i64, offset: i64) -> Self {
        self.paging_info = Some(PagingInfo { limit, offset });
        self
    }
}
