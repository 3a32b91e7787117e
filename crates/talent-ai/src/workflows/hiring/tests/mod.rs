mod analysis;
mod common;
mod selection;
