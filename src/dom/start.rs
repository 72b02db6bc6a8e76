use super::*;
use crate::api::Endpoints;
use crate::api::Remote;
use crate::board::Cell;
use crate::controller::Controller;
use crate::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Event;

/// The controller as wired into a real page.
pub type Table = Controller<Remote, Page, Jukebox>;

/// Entry point, run when the module is instantiated.
///
/// Defers to `DOMContentLoaded` if the board is not in the document yet,
/// i.e. the script ran before the markup finished parsing.
#[wasm_bindgen(start)]
pub fn start() -> JsResult<()> {
    crate::console();
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(ID_BOARD).is_none() {
        let ready = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: Event| {
            mount(&ready)
                .inspect_err(|e| log::error!("failed to mount: {}", describe(e)))
                .ok();
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    } else {
        mount(&document)
    }
}

/// Build the controller over `document` and attach every click listener.
pub fn mount(document: &Document) -> JsResult<()> {
    let endpoints = Endpoints::from(
        document
            .body()
            .and_then(|body| body.get_attribute(ATTR_API_BASE)),
    );
    log::info!("move service at {:?}", endpoints.base());
    let table = Rc::new(Table::new(
        Remote::new(endpoints),
        Page::new(document)?,
        Jukebox::new(document)?,
    ));
    let close = document
        .query_selector(SEL_MODAL_CLOSE)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {}", SEL_MODAL_CLOSE)))?;

    on_click(&by_id(document, ID_BOARD)?, {
        let table = table.clone();
        move |event| {
            if let Some(cell) = target(&event) {
                let table = table.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    table.click(cell).await.ok();
                });
            }
        }
    })?;
    on_click(&by_id(document, ID_RESET)?, {
        let table = table.clone();
        move |_| {
            let table = table.clone();
            wasm_bindgen_futures::spawn_local(async move {
                table.reset().await.ok();
            });
        }
    })?;
    on_click(&by_id(document, ID_RESET_SCORES)?, {
        let table = table.clone();
        move |_| {
            let table = table.clone();
            wasm_bindgen_futures::spawn_local(async move {
                table.clear().await.ok();
            });
        }
    })?;
    on_click(&by_id(document, ID_MUTE_SFX)?, {
        let table = table.clone();
        move |_| table.toggle_sfx()
    })?;
    on_click(&by_id(document, ID_MUTE_MUSIC)?, {
        let table = table.clone();
        move |_| table.toggle_music()
    })?;
    on_click(&by_id(document, ID_ABOUT)?, {
        let table = table.clone();
        move |_| table.toggle_modal()
    })?;
    on_click(&close, {
        let table = table.clone();
        move |_| table.toggle_modal()
    })?;

    table.mount();
    Ok(())
}

/// Listeners live as long as the page, so the closure is leaked.
fn on_click<F>(element: &Element, handler: F) -> JsResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Cell under a delegated board click. Clicks on the grid gaps carry no index.
fn target(event: &Event) -> Option<Cell> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute(ATTR_INDEX)
        .and_then(|index| {
            Cell::try_from(index.as_str())
                .inspect_err(|e| log::warn!("{}", e))
                .ok()
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(close: bool) -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        let close = match close {
            true => r#"<button class="modal-close-button"></button>"#,
            false => "",
        };
        document.body().unwrap().set_inner_html(&format!(
            r#"
            <div id="game-board"></div>
            <p id="game-status"></p>
            <span id="player-score"></span>
            <span id="ai-score"></span>
            <span id="draw-score"></span>
            <button id="reset-button"></button>
            <button id="reset-scores-button"></button>
            <button id="about-button"></button>
            <button id="mute-sfx-button"><i class="sfx-slash hidden"></i></button>
            <button id="mute-music-button"><i class="music-slash"></i></button>
            <div id="about-modal" class="hidden">{}</div>
            <audio id="clickSound"></audio>
            <audio id="winSound"></audio>
            <audio id="bgMusic"></audio>
            "#,
            close
        ));
        document
    }

    fn press(element: &Element) {
        element.clone().dyn_into::<HtmlElement>().unwrap().click();
    }

    fn hidden(document: &Document, selector: &str) -> bool {
        document
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .class_list()
            .contains(CLASS_HIDDEN)
    }

    #[wasm_bindgen_test]
    fn delegated_clicks_find_the_cell() {
        let document = fixture(true);
        let grid = by_id(&document, ID_BOARD).unwrap();
        grid.set_inner_html(r#"<div data-index="0">X</div><div data-index="4"></div>"#);
        let seen = Rc::new(RefCell::new(Vec::new()));
        on_click(&grid, {
            let seen = seen.clone();
            move |event| seen.borrow_mut().push(target(&event))
        })
        .unwrap();
        press(&grid.query_selector("[data-index='4']").unwrap().unwrap());
        press(&grid);
        assert_eq!(*seen.borrow(), vec![Some(Cell::try_from(4usize).unwrap()), None]);
    }

    #[wasm_bindgen_test]
    fn mount_needs_a_close_button() {
        let document = fixture(false);
        let error = mount(&document).unwrap_err();
        assert_eq!(describe(&error), format!("missing {}", SEL_MODAL_CLOSE));
    }

    #[wasm_bindgen_test]
    fn mount_wires_the_buttons() {
        let document = fixture(true);
        mount(&document).unwrap();
        assert_eq!(by_id(&document, ID_BOARD).unwrap().children().length(), 9);
        assert!(!hidden(&document, SEL_MUSIC_SLASH));

        press(&by_id(&document, ID_ABOUT).unwrap());
        assert!(!hidden(&document, "#about-modal"));
        press(&document.query_selector(SEL_MODAL_CLOSE).unwrap().unwrap());
        assert!(hidden(&document, "#about-modal"));

        press(&by_id(&document, ID_MUTE_SFX).unwrap());
        assert!(!hidden(&document, SEL_SFX_SLASH));
    }
}
