pub mod asset_routes;
