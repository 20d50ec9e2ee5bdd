//! Unit test modules.

mod composite_test;
mod efficiency_test;
mod leak_test;
mod tempo_test;
