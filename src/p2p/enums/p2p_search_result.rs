use crate::p2p::structs::p2p_listing_page::P2pListingPage;

#[derive(Debug, Clone)]
pub enum P2pSearchResult {
    /// The upstream returned nothing, or every page failed.
    NoSellers,
    Found(P2pListingPage),
}
