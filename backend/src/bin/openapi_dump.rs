//! Print the OpenAPI document as JSON.

use std::io::{self, Write as _};

use shipping_calculator::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{document}")
}
