//
//  live-editor-api
//  cms/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # CMS Resource Modules
//!
//! Thin resource accessors over the [`ApiClient`](crate::ApiClient) dispatch
//! contract. Each module owns the URL-path construction for its resource and
//! hands everything else (authorization, refresh-and-retry, response
//! wrapping) to the client.
//!
//! - [`revisions`]: content revision lookups

/// Content revision lookups.
pub mod revisions;
