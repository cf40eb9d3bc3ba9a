pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
    pub mod sequence;
}

pub mod utils {
    pub mod date;
    pub mod json;
    pub mod logs;
}

pub mod gateway;
pub mod publications;
pub mod authors;
pub mod publishers;
pub mod categories;
pub mod newspapers;

pub mod books {
    pub mod domain;
    pub mod dto;
}

pub mod catalog {
    pub mod command {
        pub mod add_author_cmd;
        pub mod add_book_cmd;
        pub mod add_category_cmd;
        pub mod add_newspaper_cmd;
        pub mod add_publisher_cmd;
        pub mod adjust_stock_cmd;
        pub mod get_book_cmd;
        pub mod get_newspaper_cmd;
        pub mod list_catalog_cmd;
        pub mod remove_book_cmd;
        pub mod remove_newspaper_cmd;
        pub mod search_books_cmd;
        pub mod search_newspapers_cmd;
        pub mod update_book_cmd;
        pub mod update_newspaper_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
}
