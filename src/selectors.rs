//! Every literal piece of platform markup, in one place. The rest of the crate
//! only sees these as opaque strings handed to [`crate::element::Element`]
//! queries, so a platform markup change stays a one-file edit.

/// Attribute carrying the stable question identity
pub const QUESTION_ID_ATTR: &str = "data-socialgoodpulse-id";
/// Attribute carrying an option's identifier within its question
pub const OPTION_ID_ATTR: &str = "data-socialgoodpulse-index";

// Secure assessment sections
pub const EXAM_HINT: &str = "div.secure-one-question__widget, div.assesment-1q";
pub const EXAM_PASSED_TEXT: &str = "you have passed the exam";
pub const EXAM_START_BTN: &str = ".start-button[role='button']";
pub const EXAM_RETRY_BTN: &str = "button.assessmentResults__retry-btn";
pub const QUESTION: &str = "div.block__container div.component.is-question";
pub const QUESTION_SUBMIT_BTN: &str = "div.abs__btn-arrow-container button.submit-button";
pub const SKIP_QUESTION_BTN: &str = "label[for='skip-question']";
pub const SKIP_ALL_BTN: &str = "label[for='skip-all-question'], button.abs_skip-all-button";
pub const COUNTDOWN_TIMER: &str = ".secure-toolbar-container .abs__timer .timer-clock b";
pub const FINAL_SUBMIT_SCREEN: &str = "div.component .final-screen-inner .assessment-status";
pub const CONFIRM_EXAM_CHECKBOX: &str = "input[type='checkbox']#confirm-exam";
pub const FINAL_SUBMIT_BTN: &str = "button.adaptive-assessment-submit";
pub const REVIEW_BTN: &str = "button.review-assessment-button";

// Choice questions
pub const CHOICE_WIDGET: &str = "div.mcq__widget";
pub const CHOICE_OPTION: &str = "div.mcq__widget .mcq__item";
pub const CHOICE_CORRECT_OPTION: &str = "div.mcq__widget .mcq__item.is-correct";
pub const CHOICE_OPTION_INPUT: &str = "input";
pub const CHOICE_RADIO_INPUT: &str = "input[type='radio']";
pub const CHOICE_OPTION_LABEL: &str = "label";
pub const CHOICE_SELECTED_LABEL: &str = "div.mcq__widget .mcq__item label.is-selected";
/// Marker the platform sets on a widget once it grades as complete/correct
pub const CORRECT_MARKER: &str = ".is-correct";

// Category matching
pub const CATEGORY_LHS: &str = "div.categories-container .item button";
pub const CATEGORY_RHS: &str = "div.options-container .item button";
pub const CATEGORY_ITEM_TEXT: &str = ".category-item-text";
pub const FEEDBACK_ROW: &str = ".table-feedback tr";
pub const FEEDBACK_CELL: &str = "td";
/// Attributes the platform sometimes leaks that pair left and right items
pub const PAIR_ID_ATTRS: [&str; 2] = ["data-id", "data-itemindex"];

// Dropdown matching
pub const DROPDOWN_ITEM: &str = "matching-dropdown-view, .matching__item";
pub const DROPDOWN_BTN: &str = "button.dropdown__btn";
pub const DROPDOWN_VALUE: &str = "div.dropdown__inner";
pub const DROPDOWN_OPTION: &str = "ul.dropdown__list li.dropdown__item";
pub const REVEAL_ANSWER_BTN: &str = "button.show-answer-on-submit";

// Activities
pub const NOTIFY_POPUP_CLOSE: &str = ".notify__popup button.notify__close-btn";
/// Class fragment marking a section as a single-submit inline assessment
pub const SINGLE_SUBMIT_MARKER: &str = "assessmentsinglesubmit";
pub const ACTIVITY_SUBMIT_BTN: &str = ".btn__container button.btn__action[aria-label='Submit']";
pub const ACTIVITY_CONFIRM_CHECKBOX: &str = ".btn__container button.submit__anyway-checkbox-container";
pub const ACTIVITY_RESET_BTN: &str = ".btn__container button.btn__action[aria-label='Reset']";
pub const VIDEO_IFRAME: &str = "div.brightcove__inner iframe";
pub const VIDEO_PLAY_BTN: &str = "button.vjs-big-play-button";
pub const VIDEO_PROGRESS_BAR: &str = "div.vjs-progress-holder.vjs-slider";
pub const VIDEO_PAUSED: &str = ".vjs-paused video";
pub const VIDEO_ENDED: &str = ".vjs-ended video";
pub const CONTENT_LINKS_WIDGET: &str = "div.content-links-widget";
pub const CONTENT_LINK_DIALOG_BTN: &str = "button.open-dialog.btn__action";
pub const ACCORDION_ITEM_BTN: &str = "div.component.accordion button.accordion__item-btn";
pub const TAB_WIDGET: &str = "div.component__widget.tab__widget";
pub const TAB_NAV_BTN: &str = "button.tabs__nav-item-btn";
pub const BUTTON_CONTAINER: &str = ".component__widget .btn__container";
pub const ANY_BUTTON: &str = "button";
pub const CHECK_BTN_TEXT: &str = "Check";
pub const SHOW_ME_BTN_TEXT: &str = "Show Me";

// Course navigation (consumed by the adapter, kept with the rest of the markup)
pub const SECTION: &str = ".article__container div.article";
pub const SECTION_HEADER: &str = ".component__header .component__content h1, .article__header .article__title-inner, .component__widget .module-title";
pub const NEXT_BTN: &str = "div.fullscreen button:has(.icon-right-arrow)";
pub const PROGRESS_TEXT: &str = "Checking for course progress";
