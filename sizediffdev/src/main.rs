mod application;
mod mock;
mod optimizer;
mod presentation;

use sizediff_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
