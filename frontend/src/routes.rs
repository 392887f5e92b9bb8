use dioxus::prelude::*;

use common::search_request::SearchOptions;
use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::annotations_page::AnnotationsPage;
use crate::pages::catalog_page::CatalogPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/catalog/:selected_service/:search_options")]
    CatalogPage {
        selected_service: UrlParam<Option<String>>,
        search_options: UrlParam<SearchOptions>,
    },


    #[route("/annotations")]
    AnnotationsPage {},

}

impl Route {
    pub fn catalog_page(selected_service: Option<String>, search_options: SearchOptions) -> Self {
        Self::CatalogPage {
            selected_service: UrlParam::from(selected_service),
            search_options: UrlParam::from(search_options),
        }
    }
}
