mod wheel_audio;
mod wheel_canvas;
mod wheel_utils;

use std::rc::Rc;
use std::cell::RefCell;
use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use shared::wheel::{Prize, SpinResult, WheelEngine};

use wheel_audio::WheelAudio;
use wheel_canvas::{WheelCanvas, ease_out_quart};
pub use wheel_utils::{ResultDisplay, SpinButton, format_expiry};

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub prizes: Vec<Prize>,
    #[prop_or_default]
    pub disabled: bool,
    /// Sound is opt-in; hosts enable it from a page flag.
    #[prop_or(true)]
    pub muted: bool,
    #[prop_or(true)]
    pub confetti: bool,
    #[prop_or_else(|| "Spin to Win".to_string())]
    pub button_label: String,
    pub on_spin_end: Callback<SpinResult>,
}

/// The wheel widget. All selection and rotation decisions live in the
/// shared [`WheelEngine`]; this component only drives animation frames,
/// sound and the celebration burst around it.
#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let engine = use_mut_ref(|| WheelEngine::new(Vec::new()));
    let audio = use_mut_ref(WheelAudio::new);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    // Bumped once per resolved spin; the canvas draws the burst for it.
    let burst = use_state(|| 0_u32);

    {
        let engine = engine.clone();
        use_effect_with(props.prizes.clone(), move |prizes| {
            engine.borrow_mut().set_prizes(prizes.clone());
            || ()
        });
    }

    {
        let engine = engine.clone();
        use_effect_with(props.disabled, move |disabled| {
            engine.borrow_mut().set_disabled(*disabled);
            || ()
        });
    }

    {
        let audio = audio.clone();
        use_effect_with(props.muted, move |muted| {
            audio.borrow_mut().set_muted(*muted);
            || ()
        });
    }

    // Sound resources live exactly as long as the widget instance.
    {
        let audio = audio.clone();
        use_effect_with((), move |_| {
            move || audio.borrow_mut().shutdown()
        });
    }

    let start_spin = {
        let engine = engine.clone();
        let audio = audio.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let burst = burst.clone();
        let on_spin_end = props.on_spin_end.clone();

        Callback::from(move |_| {
            // The engine decides whether this click counts; disabled, empty
            // and mid-spin clicks all come back as None.
            let plan = match engine.borrow_mut().spin() {
                Some(plan) => plan,
                None => return,
            };

            is_spinning.set(true);
            audio.borrow_mut().start_loop();

            let engine = engine.clone();
            let audio = audio.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let burst = burst.clone();
            let on_spin_end = on_spin_end.clone();

            let start_time = js_sys::Date::now();
            let duration = plan.duration_ms as f64;
            let rotation_change = plan.target_rotation - plan.start_rotation;

            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let progress = (elapsed / duration).min(1.0);

                let eased = ease_out_quart(progress);
                rotation.set(plan.start_rotation + rotation_change * eased);

                if elapsed < duration {
                    if let Some(window) = web_sys::window() {
                        let _ = window.request_animation_frame(
                            f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        );
                    }
                } else {
                    rotation.set(plan.target_rotation);
                    is_spinning.set(false);
                    audio.borrow_mut().stop_loop();

                    // complete() emits at most once even if this closure
                    // were ever to fire again.
                    if let Some(result) = engine.borrow_mut().complete() {
                        audio.borrow_mut().play_win();
                        burst.set(*burst + 1);
                        on_spin_end.emit(result);
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        })
    };

    html! {
        <div class="flex flex-col items-center">
            <div class="w-full max-w-[450px] mx-auto">
                <WheelCanvas
                    prizes={props.prizes.clone()}
                    rotation={*rotation}
                    is_spinning={*is_spinning}
                    burst={if props.confetti { *burst } else { 0 }}
                />
            </div>
            <div class="w-full max-w-[300px] mt-6">
                <SpinButton
                    is_spinning={*is_spinning}
                    disabled={props.disabled}
                    label={props.button_label.clone()}
                    onclick={start_spin}
                />
            </div>
        </div>
    }
}
