//!
//! All realm roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    #[strum(serialize = "producto-rol2")]
    ProductoRol2,
}
