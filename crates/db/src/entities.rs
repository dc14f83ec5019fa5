//! Collection bindings for the domain payload types.

use tally_core::records::{Activity, FileMeta, Finance};

use crate::document::Entity;

impl Entity for Activity {
    const COLLECTION: &'static str = "activity";
}

impl Entity for Finance {
    const COLLECTION: &'static str = "finance";
}

impl Entity for FileMeta {
    const COLLECTION: &'static str = "file";
}
