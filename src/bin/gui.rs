#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use chrono::Local;
use eframe::{egui, App, Frame};
use everyday_toolbox::{
    config::{self, UnitSystem},
    conversion,
    fitness::{ActivityLevel, Exercise, FitnessSession, Gender, ProfileUpdate, UserProfile},
    grocery, logging,
    quantity::QuantityKind,
    vehicle::{self, TireSpec},
    water::{self, HouseSupplyInput},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<(), eframe::Error> {
    logging::init_logger(false);

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([960.0, 680.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default(CONFIG_PATH).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        config::Config::default()
    });
    eframe::run_native(
        "Everyday Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup failed: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾아 적용한다.
/// 1) assets/fonts 안의 폰트
/// 2) Windows/macOS/Linux 기본 한글 폰트
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        "assets/fonts/malgun.ttf",
        "C:\\Windows\\Fonts\\malgun.ttf",
        "C:\\Windows\\Fonts\\gulim.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    for path in candidates {
        if let Ok(bytes) = fs::read(path) {
            apply_font_bytes(ctx, bytes, "korean");
            return Ok(());
        }
    }
    Err("한글 폰트를 찾지 못했습니다. 기본 폰트를 사용합니다.".to_string())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn error_label(ui: &mut egui::Ui, text: impl Into<String>) {
    ui.colored_label(egui::Color32::from_rgb(200, 60, 60), text.into());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    WaterSupply,
    Fitness,
    Receipt,
    TireVolume,
    FuelEfficiency,
    UnitConv,
}

struct GuiApp {
    config: config::Config,
    tab: Tab,
    status: Option<String>,
    // 수압
    water_input: HouseSupplyInput,
    // 피트니스
    fit_age: u32,
    fit_weight: f64,
    fit_height: f64,
    fit_gender: Gender,
    fit_level: ActivityLevel,
    fit_session: Option<FitnessSession>,
    fit_exercise: Exercise,
    fit_duration: f64,
    fit_food_name: String,
    fit_food_qty: u32,
    fit_food_kcal: f64,
    fit_report: Option<String>,
    fit_error: Option<String>,
    // 영수증
    receipt_products: String,
    receipt_request: String,
    receipt_text: Option<Result<String, String>>,
    // 타이어
    tire_width: f64,
    tire_aspect: f64,
    tire_diameter: f64,
    // 연비
    fuel_start: f64,
    fuel_end: f64,
    fuel_gallons: f64,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = QuantityKind::Pressure.default_units();
        let (fit_weight, fit_height) = match config.unit_system {
            UnitSystem::Metric => (70.0, 175.0),
            UnitSystem::Imperial => (154.0, 69.0),
        };
        Self {
            receipt_products: config.receipt.products_path.display().to_string(),
            receipt_request: config.receipt.request_path.display().to_string(),
            config,
            tab: Tab::WaterSupply,
            status: None,
            water_input: HouseSupplyInput {
                tower_height_m: 36.6,
                tank_height_m: 9.1,
                supply_length_m: 1524.0,
                fitting_count: 3,
                house_length_m: 15.2,
            },
            fit_age: 25,
            fit_weight,
            fit_height,
            fit_gender: Gender::Male,
            fit_level: ActivityLevel::Moderate,
            fit_session: None,
            fit_exercise: Exercise::Running,
            fit_duration: 30.0,
            fit_food_name: String::new(),
            fit_food_qty: 1,
            fit_food_kcal: 0.0,
            fit_report: None,
            fit_error: None,
            receipt_text: None,
            tire_width: 205.0,
            tire_aspect: 60.0,
            tire_diameter: 15.0,
            fuel_start: 0.0,
            fuel_end: 300.0,
            fuel_gallons: 10.0,
            conv_kind: QuantityKind::Pressure,
            conv_value: 100.0,
            conv_from: conv_from.to_string(),
            conv_to: conv_to.to_string(),
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("메뉴");
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::WaterSupply, "주택 수압"),
            (Tab::Fitness, "운동/칼로리"),
            (Tab::Receipt, "영수증"),
            (Tab::TireVolume, "타이어 체적"),
            (Tab::FuelEfficiency, "연비"),
            (Tab::UnitConv, "단위 변환기"),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_water(&mut self, ui: &mut egui::Ui) {
        ui.heading("급수탑 → 주택 수압");
        ui.add_space(8.0);
        let input = &mut self.water_input;
        egui::Grid::new("water_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("급수탑 높이");
                ui.add(egui::DragValue::new(&mut input.tower_height_m).speed(0.1).suffix(" m"));
                ui.end_row();
                ui.label("수조 벽 높이");
                ui.add(egui::DragValue::new(&mut input.tank_height_m).speed(0.1).suffix(" m"));
                ui.end_row();
                label_with_tip(ui, "본관 길이", "PVC Sched 80, 내경 0.28687 m, 1.65 m/s");
                ui.add(egui::DragValue::new(&mut input.supply_length_m).speed(1.0).suffix(" m"));
                ui.end_row();
                ui.label("90° 엘보 개수");
                ui.add(egui::DragValue::new(&mut input.fitting_count).speed(0.2));
                ui.end_row();
                label_with_tip(ui, "인입관 길이", "HDPE SDR11, 내경 0.048692 m, 1.75 m/s");
                ui.add(egui::DragValue::new(&mut input.house_length_m).speed(0.5).suffix(" m"));
                ui.end_row();
            });
        ui.separator();
        match water::house_pressure(&self.water_input) {
            Ok(res) => {
                egui::Grid::new("water_result").num_columns(2).show(ui, |ui| {
                    for (label, value) in [
                        ("물기둥 높이 [m]", res.water_height_m),
                        ("정수압 [kPa]", res.static_gain_kpa),
                        ("본관 마찰 [kPa]", res.supply_friction_kpa),
                        ("엘보 손실 [kPa]", res.fittings_kpa),
                        ("관경 축소 [kPa]", res.reduction_kpa),
                        ("인입관 마찰 [kPa]", res.house_friction_kpa),
                    ] {
                        ui.label(label);
                        ui.monospace(format!("{value:>10.2}"));
                        ui.end_row();
                    }
                    ui.label("본관 레이놀즈수");
                    ui.monospace(format!("{:>10.0}", res.reynolds));
                    ui.end_row();
                });
                ui.add_space(6.0);
                ui.strong(format!(
                    "주택 수압: {:.1} kPa ({:.1} psi)",
                    res.pressure_kpa, res.pressure_psi
                ));
            }
            Err(e) => error_label(ui, e.to_string()),
        }
    }

    fn ui_fitness(&mut self, ui: &mut egui::Ui) {
        ui.heading("운동/칼로리 기록");
        ui.add_space(8.0);
        let system = self.config.unit_system;
        let (weight_label, height_label) = system.labels();
        egui::Grid::new("fit_profile")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("나이");
                ui.add(egui::DragValue::new(&mut self.fit_age).speed(0.2));
                ui.end_row();
                ui.label(format!("체중 [{weight_label}]"));
                ui.add(egui::DragValue::new(&mut self.fit_weight).speed(0.1));
                ui.end_row();
                ui.label(format!("키 [{height_label}]"));
                ui.add(egui::DragValue::new(&mut self.fit_height).speed(0.1));
                ui.end_row();
                ui.label("성별");
                egui::ComboBox::from_id_source("fit_gender")
                    .selected_text(self.fit_gender.to_string())
                    .show_ui(ui, |ui| {
                        for g in [Gender::Male, Gender::Female] {
                            ui.selectable_value(&mut self.fit_gender, g, g.to_string());
                        }
                    });
                ui.end_row();
                ui.label("활동 수준");
                egui::ComboBox::from_id_source("fit_level")
                    .selected_text(self.fit_level.to_string())
                    .show_ui(ui, |ui| {
                        for level in ActivityLevel::ALL {
                            ui.selectable_value(&mut self.fit_level, level, level.to_string());
                        }
                    });
                ui.end_row();
            });

        let weight_kg = system.weight_to_kg(self.fit_weight);
        let height_cm = system.height_to_cm(self.fit_height);
        ui.horizontal(|ui| {
            let label = if self.fit_session.is_some() {
                "프로필 적용"
            } else {
                "세션 시작"
            };
            if ui.button(label).clicked() {
                self.apply_fit_profile(weight_kg, height_cm);
            }
            if self.fit_session.is_some() && ui.button("세션 초기화").clicked() {
                self.fit_session = None;
                self.fit_report = None;
            }
        });
        if let Some(err) = &self.fit_error {
            error_label(ui, err.clone());
        }

        let Some(session) = self.fit_session.as_mut() else {
            ui.label("프로필을 입력하고 세션을 시작하세요.");
            return;
        };
        ui.label(format!(
            "BMR: {:.2} kcal/day   TDEE: {:.2} kcal/day",
            session.profile().bmr(),
            session.profile().tdee()
        ));
        ui.separator();

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("fit_exercise")
                .selected_text(self.fit_exercise.to_string())
                .show_ui(ui, |ui| {
                    for ex in Exercise::ALL {
                        ui.selectable_value(&mut self.fit_exercise, ex, ex.to_string());
                    }
                });
            ui.add(egui::DragValue::new(&mut self.fit_duration).speed(1.0).suffix(" 분"));
            if ui.button("운동 기록").clicked() {
                if let Err(e) = session.log_activity(self.fit_exercise, self.fit_duration) {
                    self.fit_error = Some(e.to_string());
                }
            }
        });
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.fit_food_name).hint_text("음식 이름"));
            ui.add(egui::DragValue::new(&mut self.fit_food_qty).prefix("수량 "));
            ui.add(egui::DragValue::new(&mut self.fit_food_kcal).speed(1.0).suffix(" kcal"));
            if ui.button("음식 기록").clicked() && !self.fit_food_name.trim().is_empty() {
                session.log_food(&self.fit_food_name, self.fit_food_qty, self.fit_food_kcal);
                self.fit_food_name.clear();
            }
        });

        ui.add_space(6.0);
        egui::Grid::new("fit_log").striped(true).num_columns(3).show(ui, |ui| {
            for entry in session.activities() {
                ui.label(entry.exercise.to_string());
                ui.label(format!("{:.0} 분", entry.duration_min));
                ui.label(format!("-{:.1} kcal", entry.calories));
                ui.end_row();
            }
            for entry in session.foods() {
                ui.label(entry.food_item.as_str());
                ui.label(format!("× {}", entry.quantity));
                ui.label(format!("+{:.1} kcal", entry.calories));
                ui.end_row();
            }
        });

        if ui.button("리포트 생성").clicked() {
            self.fit_report = Some(session.report(Local::now().naive_local()).to_string());
        }
        if let Some(report) = &self.fit_report {
            ui.group(|ui| {
                ui.label(report.as_str());
            });
        }
    }

    /// 입력된 프로필로 세션을 시작하거나 기존 세션의 프로필을 갱신한다.
    fn apply_fit_profile(&mut self, weight_kg: f64, height_cm: f64) {
        self.fit_error = None;
        let result = if let Some(session) = self.fit_session.as_mut() {
            session
                .update_profile(ProfileUpdate {
                    age: Some(self.fit_age),
                    weight_kg: Some(weight_kg),
                    height_cm: Some(height_cm),
                    gender: Some(self.fit_gender),
                    activity_level: Some(self.fit_level),
                })
                .map(|_| ())
        } else {
            UserProfile::new(
                self.fit_age,
                weight_kg,
                height_cm,
                self.fit_gender,
                self.fit_level,
            )
            .map(|profile| {
                self.fit_session = Some(FitnessSession::new(profile));
            })
        };
        if let Err(e) = result {
            self.fit_error = Some(e.to_string());
        }
    }

    fn ui_receipt(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.config.receipt.store_name.as_str());
        ui.add_space(8.0);
        egui::Grid::new("receipt_files")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("상품 목록 CSV");
                ui.text_edit_singleline(&mut self.receipt_products);
                if ui.button("찾아보기").clicked() {
                    if let Some(path) = pick_csv() {
                        self.receipt_products = path;
                    }
                }
                ui.end_row();
                ui.label("주문서 CSV");
                ui.text_edit_singleline(&mut self.receipt_request);
                if ui.button("찾아보기").clicked() {
                    if let Some(path) = pick_csv() {
                        self.receipt_request = path;
                    }
                }
                ui.end_row();
            });
        if ui.button("영수증 만들기").clicked() {
            self.receipt_text = Some(self.build_receipt_text());
        }
        ui.separator();
        match &self.receipt_text {
            Some(Ok(text)) => {
                ui.add(egui::Label::new(egui::RichText::new(text.as_str()).monospace()));
            }
            Some(Err(e)) => error_label(ui, e.clone()),
            None => {}
        }
    }

    fn build_receipt_text(&self) -> Result<String, String> {
        let settings = &self.config.receipt;
        let catalog = grocery::read_catalog(&self.receipt_products).map_err(|e| e.to_string())?;
        let requests = grocery::read_requests(&self.receipt_request).map_err(|e| e.to_string())?;
        grocery::build_receipt(
            &settings.store_name,
            &settings.survey_url,
            &catalog,
            &requests,
            Local::now().naive_local(),
        )
        .map(|receipt| receipt.to_string())
        .map_err(|e| e.to_string())
    }

    fn ui_tire(&mut self, ui: &mut egui::Ui) {
        ui.heading("타이어 체적");
        ui.add_space(8.0);
        egui::Grid::new("tire_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label_with_tip(ui, "폭", "100 mm 이상");
                ui.add(egui::DragValue::new(&mut self.tire_width).speed(1.0).suffix(" mm"));
                ui.end_row();
                label_with_tip(ui, "편평비", "30 이상");
                ui.add(egui::DragValue::new(&mut self.tire_aspect).speed(1.0));
                ui.end_row();
                label_with_tip(ui, "휠 직경", "11 in 이상");
                ui.add(egui::DragValue::new(&mut self.tire_diameter).speed(0.5).suffix(" in"));
                ui.end_row();
            });
        ui.separator();
        match TireSpec::new(self.tire_width, self.tire_aspect, self.tire_diameter) {
            Ok(spec) => {
                let volume = vehicle::tire_volume_liters(&spec);
                ui.strong(format!("체적(근사): {volume:.2} L"));
                let log_path = self.config.tire.log_path.clone();
                if ui.button(format!("{} 에 기록", log_path.display())).clicked() {
                    self.status = Some(
                        match vehicle::append_volume_record(
                            &log_path,
                            Local::now().date_naive(),
                            &spec,
                            volume,
                        ) {
                            Ok(()) => format!("{} 에 기록했습니다.", log_path.display()),
                            Err(e) => e.to_string(),
                        },
                    );
                }
            }
            Err(e) => error_label(ui, e.to_string()),
        }
    }

    fn ui_fuel(&mut self, ui: &mut egui::Ui) {
        ui.heading("연비");
        ui.add_space(8.0);
        egui::Grid::new("fuel_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("시작 주행거리");
                ui.add(egui::DragValue::new(&mut self.fuel_start).speed(1.0).suffix(" mi"));
                ui.end_row();
                ui.label("종료 주행거리");
                ui.add(egui::DragValue::new(&mut self.fuel_end).speed(1.0).suffix(" mi"));
                ui.end_row();
                ui.label("사용 연료");
                ui.add(egui::DragValue::new(&mut self.fuel_gallons).speed(0.1).suffix(" gal"));
                ui.end_row();
            });
        ui.separator();
        let result = vehicle::miles_per_gallon(self.fuel_start, self.fuel_end, self.fuel_gallons)
            .and_then(|mpg| vehicle::lp100k_from_mpg(mpg).map(|lp| (mpg, lp)));
        match result {
            Ok((mpg, lp100k)) => {
                ui.strong(format!("{mpg:.2} mpg"));
                ui.strong(format!("{lp100k:.2} L/100km"));
            }
            Err(e) => error_label(ui, e.to_string()),
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        ui.heading("단위 변환기");
        ui.add_space(8.0);
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("물리량");
                let before = self.conv_kind;
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(self.conv_kind.label())
                    .show_ui(ui, |ui| {
                        for kind in QuantityKind::ALL {
                            ui.selectable_value(&mut self.conv_kind, kind, kind.label());
                        }
                    });
                if before != self.conv_kind {
                    let (f, t) = self.conv_kind.default_units();
                    self.conv_from = f.to_string();
                    self.conv_to = t.to_string();
                }
                ui.end_row();
                ui.label("값");
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
                ui.end_row();
                ui.label("입력 단위");
                unit_combo(ui, "conv_from", &mut self.conv_from, conversion::unit_options(self.conv_kind));
                ui.end_row();
                ui.label("변환 단위");
                unit_combo(ui, "conv_to", &mut self.conv_to, conversion::unit_options(self.conv_kind));
                ui.end_row();
            });
        ui.separator();
        match conversion::convert(self.conv_kind, self.conv_value, &self.conv_from, &self.conv_to) {
            Ok(v) => {
                ui.strong(format!(
                    "{} {} = {:.4} {}",
                    self.conv_value,
                    unit_label(&self.conv_from, self.conv_kind),
                    v,
                    unit_label(&self.conv_to, self.conv_kind)
                ));
            }
            Err(e) => error_label(ui, e.to_string()),
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Everyday Toolbox");
                ui.separator();
                ui.label("단위 시스템");
                let before = self.config.unit_system;
                ui.selectable_value(&mut self.config.unit_system, UnitSystem::Metric, "kg/cm");
                ui.selectable_value(&mut self.config.unit_system, UnitSystem::Imperial, "lb/in");
                if before != self.config.unit_system {
                    // 표시 중인 입력값을 새 단위로 환산
                    let kg = before.weight_to_kg(self.fit_weight);
                    let cm = before.height_to_cm(self.fit_height);
                    self.fit_weight = self.config.unit_system.weight_from_kg(kg);
                    self.fit_height = self.config.unit_system.height_from_cm(cm);
                }
                if ui.button("설정 저장").clicked() {
                    self.config.receipt.products_path = self.receipt_products.clone().into();
                    self.config.receipt.request_path = self.receipt_request.clone().into();
                    self.status = Some(match self.config.save(CONFIG_PATH) {
                        Ok(()) => format!("{CONFIG_PATH} 저장 완료"),
                        Err(e) => e.to_string(),
                    });
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_deref().unwrap_or(""));
        });

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::WaterSupply => self.ui_water(ui),
                Tab::Fitness => self.ui_fitness(ui),
                Tab::Receipt => self.ui_receipt(ui),
                Tab::TireVolume => self.ui_tire(ui),
                Tab::FuelEfficiency => self.ui_fuel(ui),
                Tab::UnitConv => self.ui_unit_conv(ui),
            });
        });
    }
}

fn pick_csv() -> Option<String> {
    FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_directory(".")
        .pick_file()
        .map(|p| p.display().to_string())
}

fn unit_label(code: &str, kind: QuantityKind) -> String {
    for (label, c) in conversion::unit_options(kind) {
        if code.eq_ignore_ascii_case(c) {
            return label.to_string();
        }
    }
    code.to_string()
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[(&str, &str)]) {
    let current = options
        .iter()
        .find(|(_, c)| value.eq_ignore_ascii_case(c))
        .map(|(l, _)| l.to_string())
        .unwrap_or_else(|| value.clone());
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(&mut *value, code.to_string(), *label);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_config_starts_with_imperial_profile_values() {
        let mut cfg = config::Config::default();
        cfg.unit_system = UnitSystem::Imperial;
        let app = GuiApp::new(cfg);
        assert_eq!(app.fit_weight, 154.0);
        assert_eq!(app.fit_height, 69.0);
        assert!(app.fit_session.is_none());
    }

    #[test]
    fn default_water_inputs_give_positive_house_pressure() {
        let app = GuiApp::new(config::Config::default());
        let res = water::house_pressure(&app.water_input).expect("default inputs are valid");
        assert!(res.pressure_kpa > 0.0, "pressure={}", res.pressure_kpa);
    }

    #[test]
    fn unit_label_falls_back_to_code() {
        assert_eq!(unit_label("mi", QuantityKind::Length), "mile");
        assert_eq!(unit_label("furlong", QuantityKind::Length), "furlong");
    }
}
