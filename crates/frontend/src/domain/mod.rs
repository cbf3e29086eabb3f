pub mod a001_movie;
pub mod a002_actor;
pub mod a003_director;
pub mod a004_producer;
pub mod a005_branch;
pub mod a006_showtime;
pub mod a007_food;
pub mod a008_order;
pub mod a009_post;
