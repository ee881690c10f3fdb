// Dashboard handlers (d402)
pub mod d402_seller_performance;
