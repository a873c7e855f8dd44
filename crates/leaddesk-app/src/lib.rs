// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod columns;
pub mod contact;
pub mod forms;
pub mod ids;
pub mod model;
pub mod projection;
pub mod seed;
pub mod selection;
pub mod state;
pub mod store;

pub use columns::*;
pub use contact::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use projection::*;
pub use seed::*;
pub use selection::*;
pub use state::*;
pub use store::*;
