// ============================================================================
// USE_TENANT_LIST - filtered, server-paginated tenant list controller
// ============================================================================
// Owns the TenantListQuery, turns it into list fetches, and wires the
// mutation handlers. Filter changes reset the page to 1 and refetch with a
// producer closed over the merged query (never the stale state handle).
// Successful writes refetch the current page from the server; failed writes
// toast the error and leave the list exactly as the last successful fetch.
// ============================================================================

use yew::prelude::*;

use crate::context::{use_toasts, Toasts};
use crate::hooks::use_fetch::{producer, use_fetch, Producer, UseFetchHandle};
use crate::models::{
    ChangePlanPayload, TenantDraft, TenantFilter, TenantListQuery, TenantPage,
};
use crate::services::tenant_service;

fn list_producer(query: TenantListQuery) -> Producer<TenantPage> {
    producer(move || {
        let query = query.clone();
        async move { tenant_service::fetch_tenants(&query).await }
    })
}

#[derive(Clone)]
pub struct UseTenantListHandle {
    pub query: UseStateHandle<TenantListQuery>,
    pub tenants: UseFetchHandle<TenantPage>,
    pub set_filter: Callback<TenantFilter>,
    pub set_page: Callback<u32>,
    pub reset_filters: Callback<()>,
    pub create: Callback<TenantDraft>,
    pub update: Callback<(String, TenantDraft)>,
    pub change_plan: Callback<(String, ChangePlanPayload)>,
    pub delete: Callback<String>,
}

/// Runs a write, then on success refetches the list with the query current
/// at call time. Failures only toast; the list is not touched.
fn mutation<A, F, Fut>(
    query: &UseStateHandle<TenantListQuery>,
    tenants: &UseFetchHandle<TenantPage>,
    toasts: &Toasts,
    success_message: &'static str,
    write: F,
) -> Callback<A>
where
    A: 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), crate::services::ApiError>> + 'static,
{
    let query = query.clone();
    let refetch = tenants.refetch.clone();
    let toasts = toasts.clone();

    Callback::from(move |args: A| {
        let current = (*query).clone();
        let refetch = refetch.clone();
        let toasts = toasts.clone();
        let fut = write(args);
        wasm_bindgen_futures::spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    toasts.success(success_message);
                    refetch.emit(Some(list_producer(current)));
                }
                Err(err) => toasts.error(err.message),
            }
        });
    })
}

#[hook]
pub fn use_tenant_list() -> UseTenantListHandle {
    let query = use_state(TenantListQuery::default);
    let toasts = use_toasts();
    let tenants = use_fetch(Some(list_producer(TenantListQuery::default())));

    let set_filter = {
        let query = query.clone();
        let refetch = tenants.refetch.clone();
        Callback::from(move |filter: TenantFilter| {
            let next = (*query).clone().with_filter(filter);
            query.set(next.clone());
            refetch.emit(Some(list_producer(next)));
        })
    };

    let set_page = {
        let query = query.clone();
        let refetch = tenants.refetch.clone();
        Callback::from(move |page: u32| {
            let next = (*query).clone().with_page(page);
            query.set(next.clone());
            refetch.emit(Some(list_producer(next)));
        })
    };

    let reset_filters = {
        let query = query.clone();
        let refetch = tenants.refetch.clone();
        Callback::from(move |_: ()| {
            let next = TenantListQuery::default();
            query.set(next.clone());
            refetch.emit(Some(list_producer(next)));
        })
    };

    let create = mutation(
        &query,
        &tenants,
        &toasts,
        "Tenant added successfully!",
        |draft: TenantDraft| async move {
            tenant_service::create_tenant(&draft).await.map(|_| ())
        },
    );

    let update = mutation(
        &query,
        &tenants,
        &toasts,
        "Tenant updated successfully",
        |(id, draft): (String, TenantDraft)| async move {
            tenant_service::update_tenant(&id, &draft).await.map(|_| ())
        },
    );

    let change_plan = mutation(
        &query,
        &tenants,
        &toasts,
        "Tenant updated successfully",
        |(id, payload): (String, ChangePlanPayload)| async move {
            tenant_service::change_plan(&id, &payload).await.map(|_| ())
        },
    );

    let delete = mutation(
        &query,
        &tenants,
        &toasts,
        "Tenant deleted successfully",
        |id: String| async move { tenant_service::delete_tenant(&id).await },
    );

    UseTenantListHandle {
        query,
        tenants,
        set_filter,
        set_page,
        reset_filters,
        create,
        update,
        change_plan,
        delete,
    }
}
