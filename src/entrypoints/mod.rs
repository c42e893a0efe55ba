mod run;

pub use run::native_main;
