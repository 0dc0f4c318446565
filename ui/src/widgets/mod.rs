pub mod notifications;
pub mod table;

pub use notifications::{Notice, NoticeLevel, Notifications};
pub use table::{
    CellValue, Column, FilterOption, TableAction, TableEvent, TableOutput, TableState,
    TableWithPagination,
};
