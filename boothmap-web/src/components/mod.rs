pub mod booth_tile;
pub mod cart_panel;
pub mod floor_grid;
pub mod footer;
pub mod header;
pub mod notice_toast;
pub mod total_ticker;

pub use booth_tile::BoothTile;
pub use cart_panel::CartPanel;
pub use floor_grid::FloorGrid;
pub use footer::Footer;
pub use header::Header;
pub use notice_toast::{Notice, NoticeToast};
pub use total_ticker::TotalTicker;
