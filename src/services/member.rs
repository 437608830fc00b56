//! Member search services backing the `/v1`, `/v2` and `/v3` endpoints.

use crate::dto::member::MemberTeamDto;
use crate::forms::member::{MemberPageQuery, MemberSearchForm};
use crate::pagination::Page;
use crate::repository::MemberSearchReader;
use crate::services::ServiceResult;

/// Every matching member, unpaged.
pub fn search_members_v1<R>(form: MemberSearchForm, repo: &R) -> ServiceResult<Vec<MemberTeamDto>>
where
    R: MemberSearchReader + ?Sized,
{
    let condition = form.condition()?;

    let rows = repo.search_members(&condition).map_err(|err| {
        log::error!("Failed to search members: {err}");
        err
    })?;

    Ok(rows.into_iter().map(MemberTeamDto::from).collect())
}

/// One page of matching members, total always counted.
pub fn search_members_v2<R>(form: MemberSearchForm, repo: &R) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberSearchReader + ?Sized,
{
    let MemberPageQuery { condition, request } = MemberPageQuery::try_from(form)?;

    let page = repo
        .search_members_page_simple(&condition, &request)
        .map_err(|err| {
            log::error!("Failed to load member page: {err}");
            err
        })?;

    Ok(page.map(MemberTeamDto::from))
}

/// One page of matching members, total counted only when it cannot be
/// inferred from the page.
pub fn search_members_v3<R>(form: MemberSearchForm, repo: &R) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberSearchReader + ?Sized,
{
    let MemberPageQuery { condition, request } = MemberPageQuery::try_from(form)?;

    let page = repo
        .search_members_page_complex(&condition, &request)
        .map_err(|err| {
            log::error!("Failed to load member page: {err}");
            err
        })?;

    Ok(page.map(MemberTeamDto::from))
}
