pub mod use_fetch;
pub mod use_tenant_list;

pub use use_fetch::{producer, use_fetch, FetchState, Producer, UseFetchHandle};
pub use use_tenant_list::{use_tenant_list, UseTenantListHandle};
