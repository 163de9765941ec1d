//! Query factories, one module per web service package
//!
//! Every function returns a [`Query`](crate::Query) already wired with its
//! method name, verb, authentication and response transform.

pub mod radio;
