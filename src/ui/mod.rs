pub mod controls;
pub mod table;

pub use controls::{
    Control, ControlContent, ControlLine, ControlPosition, InfoPanel, Legend, INFO_PLACEHOLDER,
};

pub use table::{count_message, TableRow, NO_PARKS_MESSAGE, TABLE_COLUMNS};
