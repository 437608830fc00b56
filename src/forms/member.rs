//! Query-string form for the member search endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::condition::MemberSearchCondition;
use crate::forms::FormError;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, SortOrder};

const MAX_SIZE_PARAM: i64 = MAX_PAGE_SIZE as i64;

/// Raw search parameters as they arrive in the query string.
///
/// Age bounds stay strings until [`MemberSearchForm::condition`] so that an
/// empty `ageGoe=` can be told apart from a malformed number.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchForm {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<String>,
    pub age_loe: Option<String>,
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = MAX_SIZE_PARAM))]
    pub size: Option<i64>,
    /// `property[,property...][,asc|desc]`, may repeat. Blank entries are
    /// ignored.
    #[serde(default)]
    pub sort: Vec<String>,
}

/// Validated filters plus page window for the paged endpoints.
#[derive(Debug)]
pub struct MemberPageQuery {
    pub condition: MemberSearchCondition,
    pub request: PageRequest,
}

fn parse_age(field: &'static str, value: Option<&str>) -> Result<Option<i32>, FormError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl MemberSearchForm {
    /// Filters only; paging parameters are ignored.
    pub fn condition(&self) -> Result<MemberSearchCondition, FormError> {
        Ok(MemberSearchCondition::new(
            self.username.as_deref(),
            self.team_name.as_deref(),
            parse_age("ageGoe", self.age_goe.as_deref())?,
            parse_age("ageLoe", self.age_loe.as_deref())?,
        ))
    }
}

impl TryFrom<MemberSearchForm> for MemberPageQuery {
    type Error = FormError;

    fn try_from(form: MemberSearchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let condition = form.condition()?;

        let mut sort = Vec::new();
        for param in form.sort.iter().filter(|p| !p.trim().is_empty()) {
            sort.extend(SortOrder::parse_param(param)?);
        }

        let request = PageRequest::new(
            form.page.unwrap_or(0),
            form.size.unwrap_or(DEFAULT_PAGE_SIZE as i64),
        )?
        .with_sort(sort);

        Ok(Self { condition, request })
    }
}
