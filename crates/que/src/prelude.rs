//! Convenient imports for typical `que` usage.
//!
//! ```ignore
//! use que::prelude::*;
//! ```

pub use crate::{
    Delete, Field, FieldList, Filter, FilterList, FilterOperator, Insert, ParamStyle, Params,
    QueError, QueResult, Render, RenderOptions, Select, Statement, Update, Value, delete, insert,
    select, update,
};

pub use crate::{Driver, Record, record_to_fields, record_to_insert_fields};
