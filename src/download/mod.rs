// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Download target selection and archive URLs.

mod archive;
mod resolver;

pub use archive::{archive_filename, build_archive_url, build_download_info, strip_ref_prefix};
pub use resolver::{FALLBACK_BRANCH, LATEST_CODE_LABEL, resolve_download_ref};
