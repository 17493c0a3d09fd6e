pub mod db_init;
