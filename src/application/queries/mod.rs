pub mod celebs;
