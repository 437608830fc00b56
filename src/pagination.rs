//! Page requests, sorting and page assembly with count-query skipping.

use std::str::FromStr;

use serde::Serialize;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 2000;

/// Columns a member search can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortProperty {
    MemberId,
    Username,
    Age,
    TeamId,
    TeamName,
}

impl FromStr for SortProperty {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" | "memberId" => Ok(Self::MemberId),
            "username" => Ok(Self::Username),
            "age" => Ok(Self::Age),
            "teamId" => Ok(Self::TeamId),
            "teamName" => Ok(Self::TeamName),
            other => Err(RepositoryError::InvalidArgument(format!(
                "unknown sort property '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(RepositoryError::InvalidArgument(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub property: SortProperty,
    pub direction: Direction,
}

impl SortOrder {
    /// Parse one `sort` parameter: `property[,property...][,asc|desc]`.
    ///
    /// The trailing direction applies to every property in the parameter.
    pub fn parse_param(param: &str) -> RepositoryResult<Vec<SortOrder>> {
        let mut parts: Vec<&str> = param
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let direction = match parts.last().copied() {
            Some(last) if parts.len() > 1 || last.parse::<SortProperty>().is_err() => {
                match last.parse::<Direction>() {
                    Ok(direction) => {
                        parts.pop();
                        direction
                    }
                    Err(_) => Direction::default(),
                }
            }
            _ => Direction::default(),
        };

        if parts.is_empty() {
            return Err(RepositoryError::InvalidArgument(format!(
                "sort parameter '{param}' names no property"
            )));
        }

        parts
            .into_iter()
            .map(|p| {
                Ok(SortOrder {
                    property: p.parse()?,
                    direction,
                })
            })
            .collect()
    }
}

/// Zero-based page window over a result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
    sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Validate raw page parameters. Nothing is clamped: a negative page, a
    /// size outside `1..=MAX_PAGE_SIZE` or an offset that overflows is an
    /// [`RepositoryError::InvalidArgument`].
    pub fn new(page: i64, size: i64) -> RepositoryResult<Self> {
        let page = usize::try_from(page).map_err(|_| {
            RepositoryError::InvalidArgument(format!("page must not be negative, got {page}"))
        })?;
        let size = usize::try_from(size)
            .ok()
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .ok_or_else(|| {
                RepositoryError::InvalidArgument(format!(
                    "size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
                ))
            })?;
        page.checked_mul(size)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or_else(|| RepositoryError::InvalidArgument("page offset overflows".into()))?;

        Ok(Self {
            page,
            size,
            sort: Vec::new(),
        })
    }

    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// One page of results plus the metadata clients need to navigate.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: usize,
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let size = request.size() as u64;
        let total_pages = total.div_ceil(size);
        let number = request.page();
        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            first: number == 0,
            last: (number as u64) + 1 >= total_pages,
            content,
            total_elements: total,
            total_pages,
            number,
            size: request.size(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

/// Build a page, running `count` only when the total cannot be inferred.
///
/// The total is known without a count query when
/// - this is the first page and it came back short (`content < size`), or
/// - a later page came back short but non-empty, so it is the last one and
///   `total = offset + content`.
///
/// An empty page past the first always runs `count`, since nothing can be
/// inferred about rows before the offset.
pub fn page_with_count_skip<T, E, F>(
    content: Vec<T>,
    request: &PageRequest,
    count: F,
) -> Result<Page<T>, E>
where
    F: FnOnce() -> Result<u64, E>,
{
    let offset = request.offset() as u64;
    let returned = content.len();
    let short_page = returned < request.size();

    let total = if offset == 0 && short_page {
        returned as u64
    } else if offset > 0 && returned > 0 && short_page {
        offset + returned as u64
    } else {
        count()?
    };

    Ok(Page::new(content, request, total))
}
