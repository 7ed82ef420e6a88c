pub mod dashboard;
pub mod plans;
pub mod resend_login_info;
pub mod signin;
pub mod tenants;
pub mod update_tenant_email;
