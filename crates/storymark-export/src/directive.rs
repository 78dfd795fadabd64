//! Deterministic geometry-to-semantic translation.
//!
//! [`translate`] turns a frame's finalized symbol configuration into a
//! structured, bilingual shot directive for the downstream
//! video-generation prompt. It is a pure function: no randomness, no
//! clocks, no I/O — identical inputs yield byte-identical output. It is
//! also total: unrecognized combinations contribute nothing, and a
//! frame without any contribution gets a default fallback line.

use crate::locale::{Language, Localized};
use serde::Serialize;
use storymark_core::{
    ActionIcon, CompassDirection, Frame, ProjectConfig, Symbol, SymbolIcon,
};

/// Slot a fragment occupies in the execution line. The declaration
/// order IS the output order; symbol insertion order never matters.
/// `Direction` is reserved in the priority sequence for standalone
/// heading fragments; arrow actions currently carry their heading
/// inside the action fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentSlot {
    Action,
    Speed,
    Direction,
    Camera,
    Dialogue,
    Emotion,
    Reference,
}

/// One generated instruction fragment.
#[derive(Debug, Clone, Serialize)]
pub struct Fragment {
    #[serde(skip)]
    pub slot: FragmentSlot,
    pub text: String,
}

/// The structured text generated for one shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotDirective {
    pub shot_number: u32,
    /// Shot/script correspondence line.
    pub header: String,
    /// The localized narrative, quoted verbatim.
    pub narrative: String,
    /// Assembled execution line in fixed priority order.
    pub execution: String,
}

impl ShotDirective {
    /// Render as the final multi-line block handed to the prompt
    /// assembler.
    pub fn render(&self) -> String {
        format!("{}\n{}\n{}", self.header, self.narrative, self.execution)
    }
}

/// Project-wide preamble stating style, aspect ratio, and pacing once
/// per export, ahead of the per-shot directives.
pub fn project_preamble(project: &ProjectConfig, lang: Language) -> String {
    match lang {
        Language::En => format!(
            "Style: {}. Aspect ratio {}. {} shots, about {}s each.",
            project.style,
            project.aspect_ratio.as_str(),
            project.frame_count,
            project.duration_secs,
        ),
        Language::Zh => format!(
            "风格：{}。画幅比例 {}。共 {} 个分镜，每镜约 {} 秒。",
            project.style,
            project.aspect_ratio.as_str(),
            project.frame_count,
            project.duration_secs,
        ),
    }
}

/// Translate one frame's symbol configuration into its shot directive.
pub fn translate(frame: &Frame, narrative: &str, project: &ProjectConfig, lang: Language) -> ShotDirective {
    let header = match lang {
        Language::En => format!(
            "Shot {} (script segment {})",
            frame.number, frame.number
        ),
        Language::Zh => format!("分镜 {}（对应剧本第 {} 段）", frame.number, frame.number),
    };

    let narrative = match lang {
        Language::En => format!("Narrative: {narrative}"),
        Language::Zh => format!("画面描述：{narrative}"),
    };

    let mut fragments: Vec<Fragment> = Vec::new();
    for symbol in frame.symbols() {
        fragments.extend(symbol_fragments(symbol, project, lang));
    }
    // Stable: equal slots keep frame order (e.g. two dialogue lines).
    fragments.sort_by_key(|f| f.slot);

    let execution_body = if fragments.is_empty() {
        match lang {
            Language::En => "follow the narrative description for this shot".to_string(),
            Language::Zh => "按照画面描述完成本镜头".to_string(),
        }
    } else {
        let sep = match lang {
            Language::En => "; ",
            Language::Zh => "；",
        };
        fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    };

    let execution = match lang {
        Language::En => format!("Execution: {execution_body}"),
        Language::Zh => format!("执行要求：{execution_body}"),
    };

    ShotDirective {
        shot_number: frame.number,
        header,
        narrative,
        execution,
    }
}

/// Fragments contributed by one symbol: none, one, or (for actions) an
/// action fragment plus a speed fragment. A present description is
/// appended in parentheses to the symbol's first fragment.
fn symbol_fragments(symbol: &Symbol, project: &ProjectConfig, lang: Language) -> Vec<Fragment> {
    let zone = symbol.position_zone();
    let mut fragments = match symbol.icon {
        SymbolIcon::Camera(mv) => vec![Fragment {
            slot: FragmentSlot::Camera,
            text: match lang {
                Language::En => format!("camera move: {}", mv.label(lang)),
                Language::Zh => format!("镜头运动：{}", mv.label(lang)),
            },
        }],
        SymbolIcon::Action(ActionIcon::Arrow(trajectory)) => {
            let compass = CompassDirection::from_degrees(symbol.rotation);
            let action = Fragment {
                slot: FragmentSlot::Action,
                text: match lang {
                    Language::En => format!(
                        "subject moves from {} towards {}, {} trajectory",
                        zone.label(lang),
                        compass.label(lang),
                        trajectory.label(lang),
                    ),
                    Language::Zh => format!(
                        "主体从{}向{}方向移动，{}轨迹",
                        zone.label(lang),
                        compass.label(lang),
                        trajectory.label(lang),
                    ),
                },
            };
            vec![action, speed_fragment(symbol, lang)]
        }
        SymbolIcon::Action(ActionIcon::Verb(verb)) => {
            let action = Fragment {
                slot: FragmentSlot::Action,
                text: match lang {
                    Language::En => format!("subject action: {}", verb.label(lang)),
                    Language::Zh => format!("主体动作：{}", verb.label(lang)),
                },
            };
            vec![action, speed_fragment(symbol, lang)]
        }
        SymbolIcon::Dialogue(_) => match symbol.text.as_deref() {
            Some(text) if !text.is_empty() => vec![Fragment {
                slot: FragmentSlot::Dialogue,
                text: match lang {
                    Language::En => format!("dialogue: \"{text}\""),
                    Language::Zh => format!("台词：“{text}”"),
                },
            }],
            _ => vec![],
        },
        SymbolIcon::Emotion(emotion) => {
            let level = symbol.intensity().collapse3();
            vec![Fragment {
                slot: FragmentSlot::Emotion,
                text: match lang {
                    Language::En => format!("emotion: {} {}", level.label(lang), emotion.label(lang)),
                    Language::Zh => format!("情绪：{}{}", level.label(lang), emotion.label(lang)),
                },
            }]
        }
        SymbolIcon::Reference => {
            let text = if project.reference_image.is_some() {
                match lang {
                    Language::En => format!(
                        "keep the subject consistent with the reference image, anchored at {}",
                        zone.label(lang)
                    ),
                    Language::Zh => format!("主体与参考图保持一致，位于{}", zone.label(lang)),
                }
            } else {
                match lang {
                    Language::En => "maintain visual consistency with the established character design".to_string(),
                    Language::Zh => "与既定角色设定保持视觉一致".to_string(),
                }
            };
            vec![Fragment {
                slot: FragmentSlot::Reference,
                text,
            }]
        }
        SymbolIcon::Custom => vec![],
    };

    if let (Some(description), Some(first)) = (symbol.description.as_deref(), fragments.first_mut()) {
        match lang {
            Language::En => first.text.push_str(&format!(" ({description})")),
            Language::Zh => first.text.push_str(&format!("（{description}）")),
        }
    }

    fragments
}

fn speed_fragment(symbol: &Symbol, lang: Language) -> Fragment {
    let bucket = symbol.intensity();
    Fragment {
        slot: FragmentSlot::Speed,
        text: match lang {
            Language::En => format!("movement speed: {}", bucket.label(lang)),
            Language::Zh => format!("运动速度：{}", bucket.label(lang)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storymark_core::{
        ActionVerb, AspectRatio, CameraMove, DialogueIcon, EditorConfig, EmotionIcon, Trajectory,
    };

    fn project() -> ProjectConfig {
        ProjectConfig {
            style: "watercolor".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
            duration_secs: 5,
            reference_image: None,
            frame_count: 3,
        }
    }

    fn add(frame: &mut Frame, symbol: Symbol) {
        frame.add(symbol, &EditorConfig::default()).unwrap();
    }

    #[test]
    fn test_camera_directive_center_zone() {
        let mut frame = Frame::new(1);
        add(
            &mut frame,
            Symbol::new("zoom", SymbolIcon::Camera(CameraMove::ZoomIn), 50.0, 50.0, 20.0, 20.0),
        );

        let out = translate(&frame, "A quiet street.", &project(), Language::En);
        assert!(out.execution.contains("Zoom In"));
        // Camera directives are independent of geometry
        assert!(!out.execution.contains("Center"));
    }

    #[test]
    fn test_arrow_action_directive() {
        let mut frame = Frame::new(2);
        let mut arrow = Symbol::new(
            "jump-arrow",
            SymbolIcon::Action(ActionIcon::Arrow(Trajectory::Parabolic)),
            10.0,
            10.0,
            40.0,
            40.0,
        );
        arrow.set_rotation(90.0);
        add(&mut frame, arrow);

        let out = translate(&frame, "He leaps the fence.", &project(), Language::En);
        assert!(out.execution.contains("from Top-Left"));
        assert!(out.execution.contains("towards East"));
        assert!(out.execution.contains("parabolic trajectory"));
        // 40×40 covers 16% of the canvas: slow
        assert!(out.execution.contains("movement speed: slow"));
    }

    #[test]
    fn test_verb_action_directive() {
        let mut frame = Frame::new(1);
        add(
            &mut frame,
            Symbol::new("walk", SymbolIcon::Action(ActionIcon::Verb(ActionVerb::Walk)), 0.0, 0.0, 20.0, 20.0),
        );

        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("subject action: walk"));
        assert!(out.execution.contains("movement speed"));
    }

    #[test]
    fn test_dialogue_verbatim() {
        let mut frame = Frame::new(1);
        let mut speech = Symbol::new(
            "speech",
            SymbolIcon::Dialogue(DialogueIcon::SpeechBubble),
            30.0,
            30.0,
            20.0,
            20.0,
        );
        speech.set_text("Hello there you"); // exactly 15 chars
        add(&mut frame, speech);

        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("\"Hello there you\""));
    }

    #[test]
    fn test_empty_dialogue_contributes_nothing() {
        let mut frame = Frame::new(1);
        add(
            &mut frame,
            Symbol::new("speech", SymbolIcon::Dialogue(DialogueIcon::SpeechBubble), 0.0, 0.0, 20.0, 20.0),
        );

        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("follow the narrative"));
    }

    #[test]
    fn test_emotion_intensity_qualifier() {
        let mut frame = Frame::new(1);
        // 80×95 covers 76% of the canvas: Extreme -> High
        add(
            &mut frame,
            Symbol::new("angry", SymbolIcon::Emotion(EmotionIcon::Angry), 0.0, 0.0, 80.0, 95.0),
        );

        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("extremely angry"));
    }

    #[test]
    fn test_reference_with_and_without_image() {
        let mut frame = Frame::new(1);
        add(
            &mut frame,
            Symbol::new("ref", SymbolIcon::Reference, 75.0, 75.0, 20.0, 20.0),
        );

        let without = translate(&frame, "", &project(), Language::En);
        assert!(without.execution.contains("established character design"));

        let mut with_image = project();
        with_image.reference_image = Some("ref-001".to_string());
        let with = translate(&frame, "", &with_image, Language::En);
        assert!(with.execution.contains("consistent with the reference image"));
        assert!(with.execution.contains("Bottom-Right"));
    }

    #[test]
    fn test_custom_symbol_contributes_nothing() {
        let mut frame = Frame::new(1);
        add(&mut frame, Symbol::new("note", SymbolIcon::Custom, 0.0, 0.0, 20.0, 20.0));
        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("follow the narrative"));
    }

    #[test]
    fn test_description_appended_in_parens() {
        let mut frame = Frame::new(1);
        let mut cam = Symbol::new("zoom", SymbolIcon::Camera(CameraMove::ZoomIn), 0.0, 0.0, 20.0, 20.0);
        cam.description = Some("slow push on the door".to_string());
        add(&mut frame, cam);

        let out = translate(&frame, "", &project(), Language::En);
        assert!(out.execution.contains("Zoom In (slow push on the door)"));
    }

    #[test]
    fn test_fragment_order_fixed_regardless_of_insertion() {
        let mut frame = Frame::new(1);
        // Insert deliberately backwards: emotion, camera, then action
        add(
            &mut frame,
            Symbol::new("sad", SymbolIcon::Emotion(EmotionIcon::Sad), 0.0, 0.0, 10.0, 10.0),
        );
        add(
            &mut frame,
            Symbol::new("pan", SymbolIcon::Camera(CameraMove::PanLeft), 0.0, 0.0, 10.0, 10.0),
        );
        add(
            &mut frame,
            Symbol::new("walk", SymbolIcon::Action(ActionIcon::Verb(ActionVerb::Walk)), 0.0, 0.0, 10.0, 10.0),
        );

        let out = translate(&frame, "", &project(), Language::En);
        let action = out.execution.find("subject action").unwrap();
        let speed = out.execution.find("movement speed").unwrap();
        let camera = out.execution.find("camera move").unwrap();
        let emotion = out.execution.find("emotion:").unwrap();
        assert!(action < speed && speed < camera && camera < emotion);
    }

    #[test]
    fn test_translate_is_pure() {
        let mut frame = Frame::new(4);
        let mut arrow = Symbol::new(
            "arrow",
            SymbolIcon::Action(ActionIcon::Arrow(Trajectory::Wave)),
            5.0,
            80.0,
            30.0,
            30.0,
        );
        arrow.set_rotation(200.0);
        add(&mut frame, arrow);

        let a = translate(&frame, "Waves crash.", &project(), Language::Zh);
        let b = translate(&frame, "Waves crash.", &project(), Language::Zh);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_zh_output() {
        let mut frame = Frame::new(1);
        add(
            &mut frame,
            Symbol::new("zoom", SymbolIcon::Camera(CameraMove::ZoomIn), 0.0, 0.0, 20.0, 20.0),
        );

        let out = translate(&frame, "安静的街道。", &project(), Language::Zh);
        assert!(out.header.contains("分镜 1"));
        assert!(out.narrative.contains("安静的街道。"));
        assert!(out.execution.contains("推镜头"));
    }

    #[test]
    fn test_project_preamble() {
        let text = project_preamble(&project(), Language::En);
        assert!(text.contains("watercolor"));
        assert!(text.contains("16:9"));
        assert!(text.contains("3 shots"));
    }
}
