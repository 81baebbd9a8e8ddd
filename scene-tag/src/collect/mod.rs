pub mod file_collect;
