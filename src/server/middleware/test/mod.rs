use crate::server::{
    error::{access::AccessError, AppError},
    middleware::access::ProjectAccessGuard,
};
use test_utils::{builder::TestBuilder, factory};

mod access;
