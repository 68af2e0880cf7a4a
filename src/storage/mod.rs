mod flatfile;

pub use flatfile::*;
