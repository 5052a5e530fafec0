pub mod d400_dock_demo;
