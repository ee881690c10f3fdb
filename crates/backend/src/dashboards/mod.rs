pub mod d402_seller_performance;
