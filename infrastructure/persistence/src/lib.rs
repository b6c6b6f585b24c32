pub mod db;
pub mod receipt {
    pub mod entity;
    pub mod repository;
}
