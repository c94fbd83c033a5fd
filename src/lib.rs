pub mod estimators;
pub mod session;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
