pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

pub fn select() -> LogCtx<ops::select::Select> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn cover() -> LogCtx<ops::cover::Cover> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn chapter() -> LogCtx<ops::chapter::Chapter> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
