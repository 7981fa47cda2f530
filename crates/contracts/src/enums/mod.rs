pub mod banner_kind;
