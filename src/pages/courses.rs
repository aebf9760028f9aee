//! Courses Page
//!
//! Course list with deletion and the add-course modal.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::{AppState, Course};

/// Courses page component
#[component]
pub fn Courses() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let (show_add, set_show_add) = create_signal(false);

    let courses = state.courses;

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Courses"</h1>
                    <p class="text-gray-400 mt-1">"Everything you're enrolled in"</p>
                </div>

                <button
                    on:click=move |_| set_show_add.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Course"
                </button>
            </div>

            // Add course modal
            {move || {
                if show_add.get() {
                    view! {
                        <AddCourseModal on_close=move || set_show_add.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Course grid
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let list = courses.get();

                    if list.is_empty() {
                        view! {
                            <div class="col-span-full text-center py-12">
                                <div class="text-5xl mb-4">"🎓"</div>
                                <p class="text-gray-400">"No courses yet. Add your first course!"</p>
                            </div>
                        }.into_view()
                    } else {
                        list.into_iter().enumerate().map(|(index, course)| {
                            view! { <CourseCard course=course index=index /> }
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Single course card with a delete action
#[component]
fn CourseCard(course: Course, index: usize) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let name = if course.course_name.is_empty() {
        "Untitled Course".to_string()
    } else {
        course.course_name.clone()
    };
    let code = if course.course_code.is_empty() {
        "N/A".to_string()
    } else {
        course.course_code.clone()
    };
    let instructor = if course.instructor.is_empty() {
        "N/A".to_string()
    } else {
        course.instructor.clone()
    };
    let assignment_count = course.assignments.len();

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this course?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::delete_course(index).await {
                Ok(outcome) if outcome.success => {
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    state.show_success("Course deleted successfully");
                }
                Ok(outcome) => {
                    state.show_error(
                        &outcome.error.unwrap_or_else(|| "Failed to delete course".to_string()),
                    );
                }
                Err(e) => {
                    state.show_error(&format!("Failed to delete course: {}", e));
                }
            }
            state.loading.set(false);
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-semibold">{name}</h3>
                    <div class="text-gray-400 text-sm">{code}</div>
                </div>
                <button
                    on:click=on_delete
                    title="Delete course"
                    class="text-gray-400 hover:text-red-400 transition-colors"
                >
                    "🗑️"
                </button>
            </div>

            <div class="space-y-1 mt-4 text-sm text-gray-400">
                <div class="flex justify-between">
                    <span>"Instructor:"</span>
                    <span class="text-gray-300">{instructor}</span>
                </div>
                <div class="flex justify-between">
                    <span>"Assignments:"</span>
                    <span class="text-gray-300">{assignment_count}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AddTab {
    Text,
    Url,
    Pdf,
}

/// Modal for adding a course from pasted text, a URL, or a PDF upload
#[component]
fn AddCourseModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (tab, set_tab) = create_signal(AddTab::Text);
    let (semester_start, set_semester_start) = create_signal(String::new());
    let (syllabus_text, set_syllabus_text) = create_signal(String::new());
    let (course_url, set_course_url) = create_signal(String::new());
    let (pdf_file, set_pdf_file) = create_signal(None::<web_sys::File>);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_x = on_close.clone();

    let state_for_text = state.clone();
    let on_close_for_text = on_close.clone();
    let submit_text = move |_| {
        let text = syllabus_text.get();
        if text.trim().is_empty() {
            state_for_text.show_error("Please enter syllabus text");
            return;
        }

        let start = semester_start.get();
        let state = state_for_text.clone();
        let on_close = on_close_for_text.clone();
        set_submitting.set(true);

        spawn_local(async move {
            state.loading.set(true);
            match api::add_syllabus_text(&text, &start).await {
                Ok(outcome) if outcome.success => {
                    state.show_success("Course added successfully!");
                    set_syllabus_text.set(String::new());
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    on_close();
                }
                Ok(outcome) => {
                    state.show_error(
                        &outcome.error.unwrap_or_else(|| "Failed to add course".to_string()),
                    );
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    let state_for_url = state.clone();
    let on_close_for_url = on_close.clone();
    let submit_url = move |_| {
        let url = course_url.get();
        if url.trim().is_empty() {
            state_for_url.show_error("Please enter a URL");
            return;
        }

        let start = semester_start.get();
        let state = state_for_url.clone();
        let on_close = on_close_for_url.clone();
        set_submitting.set(true);

        spawn_local(async move {
            state.loading.set(true);
            match api::add_syllabus_url(&url, &start).await {
                Ok(outcome) if outcome.success => {
                    state.show_success("Course scraped and added successfully!");
                    set_course_url.set(String::new());
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    on_close();
                }
                Ok(outcome) => {
                    state.show_error(
                        &outcome.error.unwrap_or_else(|| "Failed to scrape course".to_string()),
                    );
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    let state_for_pdf = state.clone();
    let on_close_for_pdf = on_close;
    let submit_pdf = move |_| {
        let Some(file) = pdf_file.get() else {
            state_for_pdf.show_error("Please select a PDF file");
            return;
        };

        let start = semester_start.get();
        let state = state_for_pdf.clone();
        let on_close = on_close_for_pdf.clone();
        set_submitting.set(true);

        spawn_local(async move {
            state.loading.set(true);
            match api::add_syllabus_pdf(&file, &start).await {
                Ok(outcome) if outcome.success => {
                    state.show_success("Course added from PDF successfully!");
                    set_pdf_file.set(None);
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    on_close();
                }
                Ok(outcome) => {
                    state.show_error(
                        &outcome.error.unwrap_or_else(|| "Failed to parse PDF".to_string()),
                    );
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        set_pdf_file.set(input.files().and_then(|files| files.get(0)));
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add Course"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                // Source tabs
                <div class="flex space-x-2 mb-6">
                    <TabButton
                        label="Paste Text"
                        current=tab
                        target=AddTab::Text
                        on_click=move |_| set_tab.set(AddTab::Text)
                    />
                    <TabButton
                        label="From URL"
                        current=tab
                        target=AddTab::Url
                        on_click=move |_| set_tab.set(AddTab::Url)
                    />
                    <TabButton
                        label="Upload PDF"
                        current=tab
                        target=AddTab::Pdf
                        on_click=move |_| set_tab.set(AddTab::Pdf)
                    />
                </div>

                // Semester start applies to every source
                <div class="mb-4">
                    <label class="block text-sm text-gray-400 mb-2">"Semester Start"</label>
                    <input
                        type="date"
                        prop:value=move || semester_start.get()
                        on:input=move |ev| set_semester_start.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || match tab.get() {
                    AddTab::Text => view! {
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Syllabus Text"</label>
                                <textarea
                                    rows="8"
                                    placeholder="Paste the full syllabus here..."
                                    prop:value=move || syllabus_text.get()
                                    on:input=move |ev| set_syllabus_text.set(event_target_value(&ev))
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                ></textarea>
                            </div>
                            <button
                                on:click=submit_text.clone()
                                disabled=move || submitting.get()
                                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if submitting.get() { "Parsing..." } else { "Add Course" }}
                            </button>
                        </div>
                    }.into_view(),

                    AddTab::Url => view! {
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Course Page URL"</label>
                                <input
                                    type="url"
                                    placeholder="https://university.edu/course/cs101"
                                    prop:value=move || course_url.get()
                                    on:input=move |ev| set_course_url.set(event_target_value(&ev))
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                            </div>
                            <button
                                on:click=submit_url.clone()
                                disabled=move || submitting.get()
                                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if submitting.get() { "Scraping..." } else { "Scrape and Add" }}
                            </button>
                        </div>
                    }.into_view(),

                    AddTab::Pdf => view! {
                        <div class="space-y-4">
                            <div>
                                <label
                                    class="flex items-center justify-center px-4 py-6 bg-gray-700
                                           hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                                           border-2 border-dashed border-gray-500 hover:border-primary-500"
                                >
                                    <input
                                        type="file"
                                        accept=".pdf"
                                        class="hidden"
                                        on:change=on_file_change.clone()
                                    />
                                    <span class="flex items-center gap-2">
                                        <span>"📄"</span>
                                        {move || {
                                            pdf_file.get()
                                                .map(|f| f.name())
                                                .unwrap_or_else(|| "Choose a PDF file".to_string())
                                        }}
                                    </span>
                                </label>
                            </div>
                            <button
                                on:click=submit_pdf.clone()
                                disabled=move || submitting.get()
                                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if submitting.get() { "Uploading..." } else { "Upload and Add" }}
                            </button>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<AddTab>,
    target: AddTab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
